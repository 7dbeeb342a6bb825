//! In-place numeric coercion of one column.
//!
//! This is the only operation in the crate that mutates its table argument.

use crate::types::{Data, Table, Value};
use crate::validate::valid_number;

impl Table {
    /// Replace every numerically valid cell in column `idx` with its `Float64` value.
    ///
    /// Every row is attempted, including row 0. Cells that fail validation and rows too short to
    /// have column `idx` are left untouched. Returns the number of cells converted.
    pub fn convert_column(&mut self, idx: usize) -> usize {
        let mut converted = 0;
        for row in &mut self.rows {
            let Some(cell) = row.get_mut(idx) else {
                continue;
            };
            if let Some(n) = valid_number(cell) {
                *cell = Value::Float64(n);
                converted += 1;
            }
        }
        converted
    }
}

/// Coerce column `col_index` of a 2D table in place and return the number of converted cells.
///
/// Returns `0` and leaves `data` untouched if `data` is not a table, the table is empty, or
/// `col_index` is negative or past the end of every row.
///
/// ```rust
/// use tabular_data_analysis::processing::convert_column;
/// use tabular_data_analysis::types::{Data, Value};
///
/// let mut data = Data::from(vec![
///     vec![Value::from("region"), Value::from("sales")],
///     vec![Value::from("North"), Value::from("1000")],
/// ]);
/// assert_eq!(convert_column(&mut data, 1), 1);
/// assert_eq!(convert_column(&mut data, -1), 0);
/// ```
pub fn convert_column<I>(data: &mut Data, col_index: I) -> usize
where
    I: TryInto<usize>,
{
    let Ok(idx) = col_index.try_into() else {
        return 0;
    };
    match data {
        Data::Table(table) => table.convert_column(idx),
        _ => 0,
    }
}
