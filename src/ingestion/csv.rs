//! Delimited-text loading implementation.

use std::path::Path;

use crate::error::{TableError, TableResult};
use crate::types::{Row, Table, Value};

use super::loader::LoadOptions;

/// Load a delimited text file into an in-memory [`Table`] of `Utf8` cells.
///
/// Rules:
///
/// - Every physical line is a row; the first line is not treated as a header.
/// - Cells are kept as text. No numeric coercion happens here.
/// - Rows/columns listed in `options.ignore_rows` / `options.ignore_cols` are dropped.
/// - The kept rows must all have the same length; ignored lines may have any length.
pub fn load_csv_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> TableResult<Table> {
    read_csv_from_path(path, options).map(|(table, _)| table)
}

/// Load delimited data from an existing CSV reader.
///
/// The reader's own configuration (delimiter, headers) is used as-is; only the ignore lists of
/// `options` are applied. A reader that is not `flexible` rejects odd-width lines itself, before
/// the ignore lists are consulted; build it with [`reader_builder`] to avoid that.
pub fn load_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    options: &LoadOptions,
) -> TableResult<Table> {
    read_records(rdr, options).map(|(table, _)| table)
}

/// Like [`load_csv_from_path`], also returning the number of physical records read.
pub(crate) fn read_csv_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> TableResult<(Table, usize)> {
    let mut rdr = reader_builder(options)?.from_path(path)?;
    read_records(&mut rdr, options)
}

fn read_records<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    options: &LoadOptions,
) -> TableResult<(Table, usize)> {
    let mut rows: Vec<Row> = Vec::new();
    let mut records_read = 0;
    for (row_idx, result) in rdr.records().enumerate() {
        let record = result?;
        records_read += 1;
        if options.ignore_rows.contains(&row_idx) {
            continue;
        }

        let row: Row = record
            .iter()
            .enumerate()
            .filter(|(col_idx, _)| !options.ignore_cols.contains(col_idx))
            .map(|(_, raw)| Value::Utf8(raw.to_owned()))
            .collect();
        rows.push(row);
    }

    let table = Table::new(rows);
    if !table.is_rectangular() {
        return Err(ragged_row_error(&table));
    }
    Ok((table, records_read))
}

fn ragged_row_error(table: &Table) -> TableError {
    let expected = table.column_count();
    let (row, found) = table
        .rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != expected)
        .map_or((0, expected), |(i, r)| (i, r.len()));
    TableError::NotRectangular {
        row,
        expected,
        found,
    }
}

/// Build a reader configured from `options`.
///
/// The reader is `flexible`: line widths are checked after ignored rows and columns are dropped.
pub fn reader_builder(options: &LoadOptions) -> TableResult<csv::ReaderBuilder> {
    options.validate()?;
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .trim(if options.trim { csv::Trim::All } else { csv::Trim::None });
    Ok(builder)
}
