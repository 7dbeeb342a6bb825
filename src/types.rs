//! Core data model types.
//!
//! A [`Table`] is an ordered list of rows; each row is an ordered list of [`Value`] cells. There is
//! no header/data distinction: row 0 is just a row, and skipping it is the caller's choice.
//!
//! Operations whose behavior depends on the *shape* of their input (1D vs 2D vs nothing at all)
//! accept a [`Data`] value instead of a concrete container.

use serde::{Deserialize, Serialize};

use crate::error::TableResult;

/// A single cell.
///
/// Whether a cell is a "valid number" is a property checked by
/// [`crate::validate::is_valid_number`], not a variant: a `Utf8("1500")` cell is numerically
/// valid, a `Utf8("North")` cell is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Returns `true` for the numeric variants (`Int64`, `Float64`).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int64(_) | Value::Float64(_))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

/// One row of cells.
pub type Row = Vec<Value>;

/// In-memory rectangular table.
///
/// Rows are stored as `Vec<Vec<Value>>`. Loaders only ever produce rectangular tables, but a
/// caller-built table is not checked; see [`Table::is_rectangular`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    /// Row-major value storage.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the first row, or `0` for an empty table.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if every row has the same length as the first.
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().all(|row| row.len() == width)
    }

    /// Create a new table containing only rows that match `predicate`.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self { rows }
    }

    /// Create a new table whose rows hold the cells at `columns`, in that order.
    ///
    /// An index that a row does not have is skipped for that row.
    pub fn select_columns(&self, columns: &[usize]) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| columns.iter().filter_map(|&c| row.get(c).cloned()).collect())
            .collect();
        Self { rows }
    }

    /// Clone the cells of column `idx` into a row, skipping rows too short to have one.
    pub fn column(&self, idx: usize) -> Row {
        self.rows.iter().filter_map(|row| row.get(idx).cloned()).collect()
    }

    /// Serialize the table as a JSON array of arrays.
    pub fn to_json_string(&self) -> TableResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

/// Shape-polymorphic input for operations that accept "a 1D or 2D table-like structure".
///
/// JSON literals deserialize into the narrowest matching shape: `null` is [`Data::Missing`], a
/// flat array (including `[]`) is [`Data::Row`], a non-empty array of arrays is [`Data::Table`],
/// anything else is [`Data::Scalar`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Data {
    /// No value at all.
    #[default]
    Missing,
    /// A flat 1D sequence of cells.
    Row(Row),
    /// A 2D table (sequence of rows).
    Table(Table),
    /// A single bare value, e.g. an empty string.
    Scalar(Value),
}

impl Data {
    /// Parse a JSON literal into the matching shape.
    pub fn from_json_str(input: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Borrow the table, if this is 2D data.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Data::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Borrow the row, if this is 1D data.
    pub fn as_row(&self) -> Option<&[Value]> {
        match self {
            Data::Row(r) => Some(r.as_slice()),
            _ => None,
        }
    }
}

impl From<Value> for Data {
    fn from(v: Value) -> Self {
        Data::Scalar(v)
    }
}

impl From<Row> for Data {
    fn from(row: Row) -> Self {
        Data::Row(row)
    }
}

impl From<Vec<Row>> for Data {
    fn from(rows: Vec<Row>) -> Self {
        Data::Table(Table::new(rows))
    }
}

impl From<Table> for Data {
    fn from(table: Table) -> Self {
        Data::Table(table)
    }
}

impl<T: Into<Data>> From<Option<T>> for Data {
    fn from(v: Option<T>) -> Self {
        v.map_or(Data::Missing, Into::into)
    }
}
