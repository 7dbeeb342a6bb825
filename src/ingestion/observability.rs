//! Load outcome reporting.
//!
//! Every load is reported to [`LogObserver`], which forwards to the `log` facade. A caller can
//! attach one more [`LoadObserver`] through [`super::LoadOptions::observer`] to record metrics or
//! raise alerts.

use std::path::PathBuf;

use crate::error::TableError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// The file was read but is unusable, or the options were.
    Error,
    /// The file could not be opened or read.
    Critical,
}

impl LoadSeverity {
    /// Classify a load failure.
    pub fn for_error(e: &TableError) -> Self {
        match e {
            TableError::Io(_) => LoadSeverity::Critical,
            TableError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
                _ => LoadSeverity::Error,
            },
            TableError::Json(_)
            | TableError::Coercion { .. }
            | TableError::NotRectangular { .. }
            | TableError::InvalidOptions { .. } => LoadSeverity::Error,
        }
    }
}

/// What was asked of a load: the file and the rows/columns to drop from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadContext {
    /// The input path.
    pub path: PathBuf,
    /// Requested row indices to drop.
    pub ignore_rows: Vec<usize>,
    /// Requested column indices to drop.
    pub ignore_cols: Vec<usize>,
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Physical records read from the file.
    pub records_read: usize,
    /// Rows kept after `ignore_rows`.
    pub rows: usize,
    /// Columns kept after `ignore_cols`.
    pub cols: usize,
}

impl LoadStats {
    /// Number of physical records dropped by `ignore_rows`.
    ///
    /// Indices past the end of the file drop nothing and are not counted.
    pub fn rows_dropped(&self) -> usize {
        self.records_read - self.rows
    }
}

/// Observer interface for load outcomes.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &TableError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Reports load outcomes through the `log` facade.
///
/// Successes log at `debug`, failures at `warn`, alerts at `error`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl LoadObserver for LogObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        log::debug!(
            "loaded {} rows x {} cols from {} ({} of {} records dropped, {} columns ignored)",
            stats.rows,
            stats.cols,
            ctx.path.display(),
            stats.rows_dropped(),
            stats.records_read,
            ctx.ignore_cols.len()
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        log::warn!("failed to load table from {} ({severity:?}): {error}", ctx.path.display());
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &TableError) {
        log::error!("table load alert for {} ({severity:?}): {error}", ctx.path.display());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use super::{LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver};
    use crate::error::TableError;

    struct CapturingLogger {
        lines: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.lines
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static LOGGER: CapturingLogger = CapturingLogger {
        lines: Mutex::new(Vec::new()),
    };

    fn ctx() -> LoadContext {
        LoadContext {
            path: PathBuf::from("observed-sales.csv"),
            ignore_rows: vec![0],
            ignore_cols: vec![4, 5],
        }
    }

    #[test]
    fn io_errors_are_critical() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(LoadSeverity::for_error(&TableError::Io(io)), LoadSeverity::Critical);
        let ragged = TableError::NotRectangular {
            row: 1,
            expected: 2,
            found: 1,
        };
        assert_eq!(LoadSeverity::for_error(&ragged), LoadSeverity::Error);
        assert!(LoadSeverity::Critical > LoadSeverity::Error);
    }

    #[test]
    fn rows_dropped_is_records_minus_kept() {
        let stats = LoadStats {
            records_read: 8,
            rows: 7,
            cols: 5,
        };
        assert_eq!(stats.rows_dropped(), 1);
    }

    #[test]
    fn log_observer_writes_through_log_facade() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);

        let obs = LogObserver;
        let stats = LoadStats {
            records_read: 8,
            rows: 7,
            cols: 5,
        };
        obs.on_success(&ctx(), stats);
        let err = TableError::InvalidOptions {
            message: "bad delimiter".into(),
        };
        obs.on_failure(&ctx(), LoadSeverity::Error, &err);
        obs.on_alert(&ctx(), LoadSeverity::Error, &err);

        let lines = LOGGER.lines.lock().unwrap().clone();
        let ours: Vec<_> = lines
            .into_iter()
            .filter(|(_, msg)| msg.contains("observed-sales.csv"))
            .collect();
        assert_eq!(ours.len(), 3);
        assert_eq!(ours[0].0, Level::Debug);
        assert!(ours[0].1.contains("7 rows x 5 cols"));
        assert!(ours[0].1.contains("1 of 8 records dropped, 2 columns ignored"));
        assert_eq!(ours[1].0, Level::Warn);
        assert!(ours[1].1.contains("bad delimiter"));
        assert_eq!(ours[2].0, Level::Error);
    }
}
