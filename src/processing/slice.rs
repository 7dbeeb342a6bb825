//! Row filtering and column projection.

use crate::types::{Table, Value};

/// The filter value that matches every row.
pub const WILDCARD: &str = "*";

/// Row filter used by [`create_slice`].
#[derive(Debug, Clone, PartialEq)]
pub enum SliceFilter {
    /// Keep every row without looking at any cell.
    Any,
    /// Keep rows whose filter-column cell equals this value (type and value).
    Equals(Value),
}

impl SliceFilter {
    /// Returns `true` if `row` passes the filter on column `col`.
    ///
    /// A row without a cell at `col` never matches an `Equals` filter.
    pub fn matches(&self, row: &[Value], col: usize) -> bool {
        match self {
            SliceFilter::Any => true,
            SliceFilter::Equals(expected) => row.get(col) == Some(expected),
        }
    }
}

impl From<&Value> for SliceFilter {
    fn from(value: &Value) -> Self {
        match value {
            Value::Utf8(s) if s == WILDCARD => SliceFilter::Any,
            other => SliceFilter::Equals(other.clone()),
        }
    }
}

/// Keep the rows whose cell at `filter_col` equals `filter_value`, projected to `select_cols`.
///
/// - `filter_value == "*"` keeps every row, including row 0.
/// - Equality is exact: `Int64(1000)` does not match `Float64(1000.0)` or `Utf8("1000")`.
/// - `select_cols` gives the output columns in order; `None` keeps all cells of each row.
///
/// Row order follows the input. Neither `table` nor `select_cols` is modified.
///
/// ```rust
/// use tabular_data_analysis::processing::create_slice;
/// use tabular_data_analysis::types::{Table, Value};
///
/// let table = Table::new(vec![
///     vec![Value::from("date"), Value::from("region"), Value::from("sales")],
///     vec![Value::from("2024-01"), Value::from("North"), Value::Int64(1000)],
///     vec![Value::from("2024-01"), Value::from("South"), Value::Int64(1500)],
/// ]);
/// let north = create_slice(&table, 1, &Value::from("North"), Some(&[2]));
/// assert_eq!(north.rows, vec![vec![Value::Int64(1000)]]);
/// ```
pub fn create_slice(
    table: &Table,
    filter_col: usize,
    filter_value: &Value,
    select_cols: Option<&[usize]>,
) -> Table {
    slice_with(table, filter_col, &SliceFilter::from(filter_value), select_cols)
}

/// Like [`create_slice`], with an explicit [`SliceFilter`].
pub fn slice_with(
    table: &Table,
    filter_col: usize,
    filter: &SliceFilter,
    select_cols: Option<&[usize]>,
) -> Table {
    let kept = table.filter_rows(|row| filter.matches(row, filter_col));
    match select_cols {
        Some(cols) => kept.select_columns(cols),
        None => kept,
    }
}

#[cfg(test)]
mod tests {
    use super::{SliceFilter, create_slice, slice_with};
    use crate::types::{Table, Value};

    fn text(s: &str) -> Value {
        Value::from(s)
    }

    fn sales_table() -> Table {
        Table::new(vec![
            vec![text("date"), text("region"), text("product"), text("sales")],
            vec![text("2024-01"), text("North"), text("Laptop"), Value::Int64(1000)],
            vec![text("2024-01"), text("South"), text("Phone"), Value::Int64(1500)],
            vec![text("2024-01"), text("North"), text("Tablet"), Value::Int64(2000)],
        ])
    }

    #[test]
    fn filters_and_projects() {
        let table = sales_table();
        let before = table.clone();
        let cols = vec![1, 3];

        let out = create_slice(&table, 1, &Value::from("North"), Some(cols.as_slice()));

        assert_eq!(
            out.rows,
            vec![
                vec![Value::from("North"), Value::Int64(1000)],
                vec![Value::from("North"), Value::Int64(2000)],
            ]
        );
        // Inputs unchanged
        assert_eq!(table, before);
        assert_eq!(cols, vec![1, 3]);
    }

    #[test]
    fn wildcard_keeps_every_row_including_header() {
        let mut table = sales_table();
        table.rows.pop();

        let out = create_slice(&table, 0, &Value::from("*"), Some(&[1, 3]));

        assert_eq!(
            out.rows,
            vec![
                vec![Value::from("region"), Value::from("sales")],
                vec![Value::from("North"), Value::Int64(1000)],
                vec![Value::from("South"), Value::Int64(1500)],
            ]
        );
    }

    #[test]
    fn default_projection_keeps_all_columns() {
        let table = sales_table();
        let out = create_slice(&table, 2, &Value::from("Phone"), None);
        assert_eq!(out.rows, vec![table.rows[2].clone()]);
    }

    #[test]
    fn projection_follows_requested_order() {
        let table = sales_table();
        let out = create_slice(&table, 1, &Value::from("South"), Some(&[3, 0]));
        assert_eq!(out.rows, vec![vec![Value::Int64(1500), Value::from("2024-01")]]);
    }

    #[test]
    fn equality_is_type_exact() {
        let table = sales_table();
        assert!(create_slice(&table, 3, &Value::Float64(1000.0), None).is_empty());
        assert!(create_slice(&table, 3, &Value::from("1000"), None).is_empty());
        assert_eq!(create_slice(&table, 3, &Value::Int64(1000), None).row_count(), 1);
    }

    #[test]
    fn out_of_range_filter_column_matches_nothing() {
        let table = sales_table();
        assert!(create_slice(&table, 9, &Value::from("North"), None).is_empty());
        assert_eq!(slice_with(&table, 9, &SliceFilter::Any, None).row_count(), 4);
    }
}
