//! Typed record tables with textual column access
//!
//! This module maps named textual keys onto strongly-typed struct fields so
//! that a line-oriented document can be read into, and written out of, plain
//! Rust records.
//!
//! ## Architecture
//!
//! - [`segment`] - non-owning text cursor used by every parser in the crate
//! - [`codec`] - parse/encode pairs for integers, booleans, strings and lists
//! - [`field`] - adapters binding one record field to its codec and default
//! - [`table`] - column schemas and the fixed/growable table shapes
//!
//! ## Usage
//!
//! ```rust
//! use problem_set_kit::app::services::record_table::{Segment, Table, VecTable};
//!
//! #[derive(Default)]
//! struct Row {
//!     id: i32,
//!     weights: Vec<i32>,
//! }
//!
//! let mut rows: Vec<Row> = Vec::new();
//! let mut table = VecTable::new(&mut rows);
//! table.add_column("id", |r| &r.id, |r| &mut r.id);
//! table.add_column("weights", |r| &r.weights, |r| &mut r.weights);
//!
//! let row = table.new_row().unwrap();
//! table.set_value_by_name(row, "ID", Segment::new("7")).unwrap();
//! table.set_value_by_name(row, "weights", Segment::new("[1,2,3]")).unwrap();
//!
//! assert_eq!(rows[0].id, 7);
//! assert_eq!(rows[0].weights, vec![1, 2, 3]);
//! ```

pub mod codec;
pub mod field;
pub mod segment;
pub mod table;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use codec::{CodecError, FieldCodec};
pub use field::{Field, FieldAdapter};
pub use segment::Segment;
pub use table::{ColumnSpec, RecordTable, Table, TableError, TableSchema, VecTable};
