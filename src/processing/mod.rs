//! In-memory table transformations and statistics.
//!
//! Everything here is a pure function of its arguments and returns freshly allocated values,
//! with one exception: [`convert_column()`] coerces a column of its table argument in place.
//!
//! - [`sum_valid()`], [`mean_valid()`], [`median_valid()`]: statistics over a flat row
//! - [`convert_column()`]: in-place numeric coercion of one column
//! - [`flatten()`]: single-column table to flat row
//! - [`create_slice()`]: row filter + column projection
//!
//! ## Example: convert → slice → flatten → sum
//!
//! ```rust
//! use tabular_data_analysis::processing::{convert_column, create_slice, flatten, sum_valid};
//! use tabular_data_analysis::types::{Data, Value};
//!
//! let mut data = Data::from(vec![
//!     vec![Value::from("region"), Value::from("sales")],
//!     vec![Value::from("North"), Value::from("1000")],
//!     vec![Value::from("South"), Value::from("1500")],
//!     vec![Value::from("North"), Value::from("250.5")],
//! ]);
//! convert_column(&mut data, 1);
//!
//! let table = data.as_table().unwrap();
//! let north = create_slice(table, 0, &Value::from("North"), Some(&[1]));
//! let flat = flatten(&Data::from(north)).unwrap();
//! assert_eq!(sum_valid(&Data::from(flat)), Some(1250.5));
//! ```

pub mod aggregate;
pub mod convert;
pub mod reshape;
pub mod slice;

pub use aggregate::{Aggregate, aggregate, aggregate_column, mean_valid, median_valid, sum_valid};
pub use convert::convert_column;
pub use reshape::flatten;
pub use slice::{SliceFilter, WILDCARD, create_slice, slice_with};
