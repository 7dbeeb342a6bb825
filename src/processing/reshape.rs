//! Reshaping single-column tables into flat rows.

use crate::types::{Data, Row};

/// Flatten a single-column table into a new flat row, in row order.
///
/// Returns `None` if `data` is not a table or if any row holds anything other than exactly one
/// cell; multi-column tables are rejected rather than partially flattened. The input is not
/// modified.
pub fn flatten(data: &Data) -> Option<Row> {
    let table = data.as_table()?;
    table
        .rows
        .iter()
        .map(|row| match row.as_slice() {
            [cell] => Some(cell.clone()),
            _ => None,
        })
        .collect()
}
