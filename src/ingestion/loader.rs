//! Path-based table loading with options, observers and absence semantics.
//!
//! [`load_table`] is the degrading entrypoint: any failure is logged through [`LogObserver`] and
//! reported as `None`. Use [`super::csv::load_csv_from_path`] when the cause of a failure matters.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{TableError, TableResult};
use crate::types::Table;

use super::csv::read_csv_from_path;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver};

/// Options controlling how a delimited file is read.
///
/// Use [`Default`] for comma-separated input with nothing ignored.
#[derive(Clone)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Trim surrounding whitespace from every cell.
    pub trim: bool,
    /// Zero-based indices of physical rows to drop.
    pub ignore_rows: Vec<usize>,
    /// Zero-based indices of columns to drop.
    pub ignore_cols: Vec<usize>,
    /// Extra observer, notified after the built-in [`LogObserver`].
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked on both observers.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("trim", &self.trim)
            .field("ignore_rows", &self.ignore_rows)
            .field("ignore_cols", &self.ignore_cols)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
            ignore_rows: Vec::new(),
            ignore_cols: Vec::new(),
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

impl LoadOptions {
    /// Reject delimiters the CSV reader cannot use.
    pub fn validate(&self) -> TableResult<()> {
        let d = self.delimiter;
        if !d.is_ascii() || matches!(d, b'\n' | b'\r' | b'"') {
            return Err(TableError::InvalidOptions {
                message: format!("unusable delimiter byte 0x{d:02x}"),
            });
        }
        Ok(())
    }
}

/// A loaded table together with its post-ignore shape.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedTable {
    /// The kept rows, as `Utf8` cells.
    pub table: Table,
    /// Number of kept rows.
    pub total_rows: usize,
    /// Number of kept columns (length of the first kept row, `0` if none remain).
    pub total_cols: usize,
}

impl LoadedTable {
    /// Split into `(table, total_rows, total_cols)`.
    pub fn into_parts(self) -> (Table, usize, usize) {
        (self.table, self.total_rows, self.total_cols)
    }
}

impl From<Table> for LoadedTable {
    fn from(table: Table) -> Self {
        Self {
            total_rows: table.row_count(),
            total_cols: table.column_count(),
            table,
        }
    }
}

/// Load a comma-separated file, dropping the listed rows and columns.
///
/// Returns `None` if the file cannot be opened or read, or is not rectangular. The ignore lists
/// are only read.
///
/// ```no_run
/// use tabular_data_analysis::ingestion::load_table;
///
/// let Some(loaded) = load_table("sales_data.csv", &[0], &[]) else {
///     return;
/// };
/// println!("rows={} cols={}", loaded.total_rows, loaded.total_cols);
/// ```
pub fn load_table(
    path: impl AsRef<Path>,
    ignore_rows: &[usize],
    ignore_cols: &[usize],
) -> Option<LoadedTable> {
    let options = LoadOptions {
        ignore_rows: ignore_rows.to_vec(),
        ignore_cols: ignore_cols.to_vec(),
        ..Default::default()
    };
    load_table_with_options(path, &options)
}

/// Like [`load_table`], with full [`LoadOptions`].
pub fn load_table_with_options(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Option<LoadedTable> {
    try_load(path.as_ref(), options).ok()
}

fn try_load(path: &Path, options: &LoadOptions) -> TableResult<LoadedTable> {
    let ctx = LoadContext {
        path: path.to_path_buf(),
        ignore_rows: options.ignore_rows.clone(),
        ignore_cols: options.ignore_cols.clone(),
    };
    let observers = observers(options);

    match read_csv_from_path(path, options) {
        Ok((table, records_read)) => {
            let loaded = LoadedTable::from(table);
            let stats = LoadStats {
                records_read,
                rows: loaded.total_rows,
                cols: loaded.total_cols,
            };
            for obs in &observers {
                obs.on_success(&ctx, stats);
            }
            Ok(loaded)
        }
        Err(e) => {
            let sev = LoadSeverity::for_error(&e);
            for obs in &observers {
                obs.on_failure(&ctx, sev, &e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, &e);
                }
            }
            Err(e)
        }
    }
}

fn observers(options: &LoadOptions) -> Vec<&dyn LoadObserver> {
    let mut observers: Vec<&dyn LoadObserver> = vec![&LogObserver];
    if let Some(extra) = options.observer.as_deref() {
        observers.push(extra);
    }
    observers
}
