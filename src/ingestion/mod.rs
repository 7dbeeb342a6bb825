//! Loading delimited text files into [`crate::types::Table`]s.
//!
//! Most callers should use [`load_table`] which:
//!
//! - reads every line of a comma-separated file as a row of text cells
//! - drops the rows/columns named in the ignore lists
//! - reports `None` instead of an error when the file cannot be read
//!
//! The error-returning core lives in [`csv`]. Load outcomes always go to [`LogObserver`] and can
//! also be reported to a caller's [`LoadObserver`] via [`LoadOptions`].

pub mod csv;
pub mod loader;
pub mod observability;

pub use loader::{LoadOptions, LoadedTable, load_table, load_table_with_options};
pub use observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, LogObserver};
