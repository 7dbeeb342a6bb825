//! Dimension inspection.

use crate::types::Data;

/// Report `[rows, cols]` for 1D or 2D data.
///
/// - A non-empty table reports its row count and the length of its first row.
/// - A non-empty flat row is treated as a single row: `[1, len]`.
/// - Missing data, bare scalars and empty containers have no shape and return `None`.
pub fn dimensions(data: &Data) -> Option<[usize; 2]> {
    match data {
        Data::Table(t) if !t.is_empty() => Some([t.row_count(), t.column_count()]),
        Data::Row(r) if !r.is_empty() => Some([1, r.len()]),
        _ => None,
    }
}
