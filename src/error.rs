use thiserror::Error;

/// Convenience result type for table operations that can fail.
pub type TableResult<T> = Result<T, TableError>;

/// Error type returned by the fallible (non-degrading) entrypoints.
///
/// The table primitives themselves never surface these: they degrade to `None`, `0` or a skipped
/// entry. The error-returning loaders and [`crate::validate::to_number`] expose the cause.
#[derive(Debug, Error)]
pub enum TableError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error (including ragged lines).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value does not satisfy the numeric grammar and cannot be coerced.
    #[error("failed to coerce value to a number: {message} (raw='{raw}')")]
    Coercion { raw: String, message: String },

    /// The kept rows of a loaded file do not all have the same length.
    #[error("table is not rectangular: row {row} has {found} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Load options are unusable (e.g. an invalid delimiter).
    #[error("invalid options: {message}")]
    InvalidOptions { message: String },
}
