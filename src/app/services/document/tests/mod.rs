//! Test utilities for the document parser and writer
//!
//! Provides a header record and a data record type covering every codec,
//! plus helpers that run a parse and hand back the populated records once
//! every table borrow has ended.

use std::io::Write;
use tempfile::NamedTempFile;

use super::parser::{DocumentParser, ErrorMode, ParseError};
use super::stats::ParseStats;
use crate::Result;
use crate::app::services::record_table::{RecordTable, Table, TableSchema, VecTable};

mod writer_tests;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleHeader {
    pub count: i32,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleRow {
    pub id: i32,
    pub answer: i32,
    pub weights: Vec<i32>,
    pub note: String,
    pub flag: bool,
}

/// Columns of the sample header
pub fn header_schema() -> TableSchema<SampleHeader> {
    let mut schema: TableSchema<SampleHeader> = TableSchema::new();
    schema.add_column("count", |h| &h.count, |h| &mut h.count);
    schema.add_column("title", |h| &h.title, |h| &mut h.title);
    schema
}

/// Header table with `count` and `title`, reset to column defaults
pub fn header_table(header: &mut SampleHeader) -> RecordTable<'_, SampleHeader> {
    let mut table = header_schema().bind_record(header);
    table
        .set_default_values(0)
        .expect("row 0 always exists");
    table
}

/// Data table with `id`, `answer`, `weights`, `note` and `flag`
pub fn rows_table(rows: &mut Vec<SampleRow>) -> VecTable<'_, SampleRow> {
    let mut table = VecTable::new(rows);
    table.add_column("id", |r| &r.id, |r| &mut r.id);
    table.add_column("answer", |r| &r.answer, |r| &mut r.answer);
    table.add_column("weights", |r| &r.weights, |r| &mut r.weights);
    table.add_column("note", |r| &r.note, |r| &mut r.note);
    table.add_column("flag", |r| &r.flag, |r| &mut r.flag);
    table
}

/// Outcome of a parse together with the records it populated
pub struct Parsed {
    pub result: Result<ParseStats>,
    pub is_ok: bool,
    pub last_error: Option<ParseError>,
    pub header: SampleHeader,
    pub rows: Vec<SampleRow>,
}

/// Parse `text` into the sample header and rows
pub fn parse_sample(text: &str, mode: ErrorMode) -> Parsed {
    let mut header = SampleHeader::default();
    let mut rows = Vec::new();

    let (result, is_ok, last_error) = {
        let mut header_table = header_table(&mut header);
        let mut row_table = rows_table(&mut rows);
        let mut parser = DocumentParser::with_tables(&mut header_table, &mut row_table);
        let result = parser.parse_str("sample.in", text, mode);
        (result, parser.is_ok(), parser.last_error().cloned())
    };

    Parsed {
        result,
        is_ok,
        last_error,
        header,
        rows,
    }
}

/// Error message of a strict parse that is expected to fail
pub fn strict_error(text: &str) -> ParseError {
    match parse_sample(text, ErrorMode::Strict).result {
        Err(crate::Error::Parse(error)) => error,
        Err(other) => panic!("expected a parse error, got {other:?}"),
        Ok(stats) => panic!("expected a parse error, got {stats:?}"),
    }
}

pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// A well-formed document touching every column type
pub fn sample_document() -> &'static str {
    r#"# sample problem set
count: 3
title: "Warm up"

data:

- id: 1
  answer: 4
  weights: [1,2,3]

- id: 2
  note: "needs: care"
  flag: yes
-
  id: 3
"#
}
