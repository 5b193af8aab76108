//! Problem-set document reader and writer
//!
//! This module reads the flat two-section text format used by problem-set
//! files into [`Table`](crate::app::services::record_table::Table) instances
//! and writes tables back in the same shape.
//!
//! ## Architecture
//!
//! - [`parser`] - header/data section state machine and error modes
//! - [`writer`] - mirror writer with default elision
//! - [`stats`] - parsing statistics
//!
//! ## Usage
//!
//! ```rust
//! use problem_set_kit::app::services::document::{DocumentParser, ErrorMode};
//! use problem_set_kit::app::services::record_table::{RecordTable, VecTable};
//!
//! #[derive(Default)]
//! struct Header {
//!     count: i32,
//! }
//!
//! #[derive(Default)]
//! struct Row {
//!     id: i32,
//! }
//!
//! let mut header = Header::default();
//! let mut rows: Vec<Row> = Vec::new();
//!
//! let mut header_table = RecordTable::new(&mut header);
//! header_table.add_column("count", |h| &h.count, |h| &mut h.count);
//! let mut row_table = VecTable::new(&mut rows);
//! row_table.add_column("id", |r| &r.id, |r| &mut r.id);
//!
//! let text = "count: 2\ndata:\n- id: 1\n- id: 2\n";
//! let mut parser = DocumentParser::with_tables(&mut header_table, &mut row_table);
//! let stats = parser.parse_str("inline", text, ErrorMode::Strict).unwrap();
//! assert_eq!(stats.rows_appended, 2);
//! drop(parser);
//! drop(row_table);
//! drop(header_table);
//!
//! assert_eq!(header.count, 2);
//! assert_eq!(rows[1].id, 2);
//! ```

pub mod parser;
pub mod stats;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{DocumentParser, ErrorMode, ParseError, Section};
pub use stats::ParseStats;
pub use writer::{document_to_string, write_document, write_document_to_file, write_record};
