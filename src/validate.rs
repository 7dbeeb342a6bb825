//! Numeric validation and coercion of cells.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{TableError, TableResult};
use crate::types::Value;

// ASCII digits only: `\d` would also accept other Unicode decimal digits.
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?$").expect("valid number pattern"));

/// Returns `true` if `value` represents a valid number.
///
/// - `Int64` and `Float64` cells are always valid.
/// - `Utf8` cells are valid iff they match: an optional single leading `-`, one or more digits,
///   optionally followed by `.` and one or more digits. `"+1.5"`, `"5."`, `"1.2.3"`, `""`, `"-"`
///   and `"."` are all invalid.
/// - `Null` is never valid.
pub fn is_valid_number(value: &Value) -> bool {
    match value {
        Value::Int64(_) | Value::Float64(_) => true,
        Value::Utf8(s) => NUMBER_PATTERN.is_match(s),
        Value::Null => false,
    }
}

/// Coerce a cell into its numeric value.
///
/// Coercion is uniformly to `f64`. Callers are expected to check [`is_valid_number`] first; an
/// invalid cell yields [`TableError::Coercion`], which every aggregate treats as "skip".
pub fn to_number(value: &Value) -> TableResult<f64> {
    match value {
        Value::Int64(v) => Ok(*v as f64),
        Value::Float64(v) => Ok(*v),
        Value::Utf8(s) if is_valid_number(value) => {
            s.parse::<f64>().map_err(|e| TableError::Coercion {
                raw: s.clone(),
                message: e.to_string(),
            })
        }
        Value::Utf8(s) => Err(TableError::Coercion {
            raw: s.clone(),
            message: "text does not match the numeric grammar".to_string(),
        }),
        Value::Null => Err(TableError::Coercion {
            raw: String::new(),
            message: "null has no numeric value".to_string(),
        }),
    }
}

/// Validate and coerce in one step, yielding `None` for anything that should be skipped.
pub(crate) fn valid_number(value: &Value) -> Option<f64> {
    if !is_valid_number(value) {
        log::trace!("skipping non-numeric cell {value:?}");
        return None;
    }
    to_number(value).ok()
}
