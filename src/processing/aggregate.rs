//! Aggregate statistics over a 1D sequence of cells.
//!
//! Every aggregate only looks at the cells that pass [`crate::validate::is_valid_number`]; the
//! rest are dropped before any arithmetic or ordering happens. Anything that is not a flat row
//! (a table, a bare scalar, missing data) has no aggregate and yields `None`.

use crate::types::{Data, Table, Value};
use crate::validate::valid_number;

/// Built-in aggregate operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Number of valid numeric cells.
    Count,
    /// Sum of valid numeric cells.
    Sum,
    /// Arithmetic mean of valid numeric cells.
    Mean,
    /// Median of valid numeric cells.
    Median,
}

/// Run `op` over a flat row.
///
/// - Returns `None` if `data` is not a [`Data::Row`].
/// - `Count` and `Sum` of a row with no valid cells are `Some(0.0)`.
/// - `Mean` and `Median` of a row with no valid cells are `None`.
pub fn aggregate(data: &Data, op: Aggregate) -> Option<f64> {
    let row = data.as_row()?;
    aggregate_cells(row, op)
}

/// Gather column `idx` of `table` and run `op` over it.
///
/// Returns `None` if no row has a cell at `idx`.
pub fn aggregate_column(table: &Table, idx: usize, op: Aggregate) -> Option<f64> {
    let column = table.column(idx);
    if column.is_empty() {
        return None;
    }
    aggregate_cells(&column, op)
}

fn aggregate_cells(cells: &[Value], op: Aggregate) -> Option<f64> {
    let values = valid_values(cells);
    match op {
        Aggregate::Count => Some(values.len() as f64),
        Aggregate::Sum => Some(total(&values)),
        Aggregate::Mean => {
            if values.is_empty() {
                return None;
            }
            Some(total(&values) / values.len() as f64)
        }
        Aggregate::Median => median_of(values),
    }
}

// `Sum for f64` starts from -0.0; an empty sum must be +0.0.
fn total(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

fn valid_values(cells: &[Value]) -> Vec<f64> {
    cells.iter().filter_map(valid_number).collect()
}

fn median_of(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        Some((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Sum every valid numeric cell of a flat row, skipping the rest.
///
/// Returns `None` (not `0`) for tables, scalars and missing data.
pub fn sum_valid(data: &Data) -> Option<f64> {
    aggregate(data, Aggregate::Sum)
}

/// Mean of the valid numeric cells of a flat row.
///
/// The denominator is the number of *valid* cells. Returns `None` for empty rows and non-rows.
pub fn mean_valid(data: &Data) -> Option<f64> {
    aggregate(data, Aggregate::Mean)
}

/// Median of the valid numeric cells of a flat row.
///
/// Invalid cells are discarded before sorting, so they never occupy a position.
pub fn median_valid(data: &Data) -> Option<f64> {
    aggregate(data, Aggregate::Median)
}
