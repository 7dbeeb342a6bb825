//! `tabular-data-analysis` is a small library for manipulating rectangular tables of mixed
//! string/number cells, such as rows loaded from a CSV file.
//!
//! It validates and coerces cell values, computes statistics that skip non-numeric cells, and
//! filters/projects/reshapes tables. Every operation returns a freshly allocated result and leaves
//! its arguments alone, except [`processing::convert_column`], which coerces one column of its
//! table argument in place.
//!
//! ## Absence, zero and skip
//!
//! - Operations that cannot produce a meaningful result return `None` (wrong shape, empty input,
//!   unreadable file). `None` is never a stand-in for `0` or an empty collection.
//! - [`processing::convert_column`] returns `0` when its input is structurally unusable.
//! - Individual non-numeric cells inside an otherwise valid row or column are skipped.
//!
//! ## Modules
//!
//! - [`types`]: [`types::Value`] cells, [`types::Table`], and the shape-polymorphic [`types::Data`]
//! - [`validate`]: the numeric grammar and coercion to `f64`
//! - [`shape`]: dimension inspection
//! - [`processing`]: statistics, column conversion, flattening and slicing
//! - [`ingestion`]: loading delimited text files
//! - [`error`]: error types used by the fallible entrypoints
//!
//! ## Example: load → convert → slice → flatten → sum
//!
//! ```no_run
//! use tabular_data_analysis::ingestion::load_table;
//! use tabular_data_analysis::processing::{convert_column, create_slice, flatten, sum_valid};
//! use tabular_data_analysis::types::{Data, Value};
//!
//! let loaded = load_table("sales_data.csv", &[0], &[]).expect("readable file");
//! let mut data = Data::from(loaded.table);
//! convert_column(&mut data, 3);
//!
//! let table = data.as_table().unwrap();
//! let north = create_slice(table, 1, &Value::from("North"), Some(&[5]));
//! let totals = flatten(&Data::from(north)).unwrap();
//! println!("{:?}", sum_valid(&Data::from(totals)));
//! ```

pub mod error;
pub mod ingestion;
pub mod processing;
pub mod shape;
pub mod types;
pub mod validate;

pub use error::{TableError, TableResult};
pub use shape::dimensions;
pub use validate::{is_valid_number, to_number};
