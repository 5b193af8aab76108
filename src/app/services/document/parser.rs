//! Line-oriented problem-set document parser
//!
//! A document has two sections. The header section holds `key: value` lines
//! for a single header record. The line `data:` switches to the data section,
//! where every record starts with a `-` line and continues with `key: value`
//! lines until the next `-` or the end of input:
//!
//! ```text
//! # comment
//! problem_set_number: 1005230
//! problems: 2
//!
//! data:
//!
//! - problem: 1
//!   correct_answer: 4
//! - problem: 2
//!   correct_answer: 7
//! ```
//!
//! The first malformed line aborts the whole document. Depending on the
//! [`ErrorMode`] the failure is returned as an [`Error::Parse`] or recorded in
//! the parser, which is then left in a non-OK state with partially populated
//! tables.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, trace, warn};

use super::stats::ParseStats;
use crate::app::services::record_table::{Segment, Table};
use crate::constants::{COMMENT_PREFIX, DATA_SECTION_MARKER, KEY_VALUE_SEPARATOR, ROW_MARKER};
use crate::{Error, Result};

/// Structural region of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Header,
    Data,
}

/// How a hard parse error is surfaced to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Return the first error as [`Error::Parse`]
    #[default]
    Strict,
    /// Stop parsing, record the error and leave the parser non-OK
    Silent,
}

/// A hard parse error located by file name and 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub file: String,
    /// 1-based line number, `0` when the error is not tied to a line
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.file.is_empty(), self.line) {
            (true, 0) => f.write_str(&self.message),
            (true, line) => write!(f, "{}: {}", line, self.message),
            (false, 0) => write!(f, "{}: {}", self.file, self.message),
            (false, line) => write!(f, "{}:{}: {}", self.file, line, self.message),
        }
    }
}

impl std::error::Error for ParseError {}

type LineResult = std::result::Result<(), String>;

/// Two-section document parser driving a header table and a data table
#[derive(Default)]
pub struct DocumentParser<'t> {
    header: Option<&'t mut dyn Table>,
    table: Option<&'t mut dyn Table>,
    section: Section,
    line_number: usize,
    current_file: String,
    is_ok: bool,
    last_error: Option<ParseError>,
    stats: ParseStats,
}

impl<'t> DocumentParser<'t> {
    /// Create a parser that has no tables attached yet
    pub fn new() -> Self {
        Self {
            is_ok: true,
            ..Default::default()
        }
    }

    /// Create a parser for a header record and a growable data table
    pub fn with_tables(header: &'t mut dyn Table, table: &'t mut dyn Table) -> Self {
        let mut parser = Self::new();
        parser.set_header_table(header);
        parser.set_data_table(table);
        parser
    }

    pub fn set_header_table(&mut self, header: &'t mut dyn Table) {
        self.header = Some(header);
    }

    pub fn set_data_table(&mut self, table: &'t mut dyn Table) {
        self.table = Some(table);
    }

    pub fn is_ok(&self) -> bool {
        self.is_ok
    }

    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn current_line(&self) -> usize {
        self.line_number
    }

    pub fn current_file(&self) -> &str {
        &self.current_file
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Parse a document from disk
    pub fn parse_file(&mut self, path: &Path, mode: ErrorMode) -> Result<ParseStats> {
        info!("Parsing problem-set document: {}", path.display());
        let name = path.display().to_string();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                self.begin(&name);
                if mode == ErrorMode::Strict {
                    self.is_ok = false;
                    self.last_error = Some(ParseError::new(&name, 0, "Cannot open input file."));
                    return Err(Error::io(format!("Cannot open input file '{}'", name), e));
                }
                self.fail("Cannot open input file.".to_string(), mode)?;
                return Ok(self.stats.clone());
            }
        };

        self.parse_reader(&name, BufReader::new(file), mode)
    }

    /// Parse a document held in memory; `name` is used in error messages
    pub fn parse_str(&mut self, name: &str, text: &str, mode: ErrorMode) -> Result<ParseStats> {
        self.begin(name);
        if !self.check_tables(mode)? {
            return Ok(self.stats.clone());
        }

        for line in text.lines() {
            if !self.feed_line(line, mode)? {
                break;
            }
        }

        Ok(self.finish())
    }

    /// Parse a document from any buffered reader
    pub fn parse_reader<R: BufRead>(&mut self, name: &str, reader: R, mode: ErrorMode) -> Result<ParseStats> {
        self.begin(name);
        if !self.check_tables(mode)? {
            return Ok(self.stats.clone());
        }

        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    self.is_ok = false;
                    let message = format!("Failed to read line {} of '{}'", self.line_number + 1, name);
                    self.last_error = Some(ParseError::new(name, self.line_number + 1, message.clone()));
                    if mode == ErrorMode::Strict {
                        return Err(Error::io(message, e));
                    }
                    warn!("{}: {}", message, e);
                    return Ok(self.stats.clone());
                }
            };

            if !self.feed_line(&line, mode)? {
                break;
            }
        }

        Ok(self.finish())
    }

    fn begin(&mut self, name: &str) {
        self.is_ok = true;
        self.last_error = None;
        self.line_number = 0;
        self.current_file = name.to_string();
        self.section = Section::Header;
        self.stats = ParseStats::new();
    }

    fn check_tables(&mut self, mode: ErrorMode) -> Result<bool> {
        if self.table.is_none() {
            self.fail("Table adapter is not set.".to_string(), mode)?;
            return Ok(false);
        }
        Ok(true)
    }

    fn finish(&mut self) -> ParseStats {
        debug!(
            "Parsed {}: {} lines, {} header fields, {} rows, {} data fields",
            self.current_file,
            self.stats.lines_read,
            self.stats.header_fields_set,
            self.stats.rows_appended,
            self.stats.data_fields_set
        );
        self.stats.clone()
    }

    /// Process one physical line; `Ok(false)` means parsing stopped silently
    fn feed_line(&mut self, line: &str, mode: ErrorMode) -> Result<bool> {
        self.line_number += 1;
        self.stats.lines_read += 1;

        match self.parse_line(line) {
            Ok(()) => Ok(true),
            Err(message) => {
                self.fail(message, mode)?;
                Ok(false)
            }
        }
    }

    /// Single terminal point turning a line failure into the caller's error mode
    fn fail(&mut self, message: String, mode: ErrorMode) -> Result<()> {
        let error = ParseError::new(&self.current_file, self.line_number, message);
        self.is_ok = false;
        self.last_error = Some(error.clone());

        match mode {
            ErrorMode::Strict => Err(Error::Parse(error)),
            ErrorMode::Silent => {
                warn!("Parsing stopped: {}", error);
                Ok(())
            }
        }
    }

    fn parse_line(&mut self, line: &str) -> LineResult {
        let mut s = Segment::new(line);
        s.trim();

        if s.is_empty() {
            self.stats.blank_lines += 1;
            return Ok(());
        }

        let first = s.first_char();
        if first == Some(COMMENT_PREFIX) {
            self.stats.comment_lines += 1;
            return Ok(());
        }

        if s.matches(DATA_SECTION_MARKER, true) {
            trace!("Line {}: entering data section", self.line_number);
            self.section = Section::Data;
            return Ok(());
        }

        if first == Some(ROW_MARKER) {
            if self.section == Section::Header {
                return Err("Invalid entry in the header section.".to_string());
            }

            let table = self.data_table()?;
            table
                .new_row()
                .map_err(|_| "Cannot create a new table row.".to_string())?;
            self.stats.rows_appended += 1;

            s.remove_prefix(1);
            s.trim();
            if s.is_empty() {
                return Ok(());
            }
        }

        let (mut key, _) = s.split(KEY_VALUE_SEPARATOR);
        key.trim();
        s.trim();

        if key.is_empty() || s.is_empty() {
            return Err("Key or value is empty.".to_string());
        }

        match self.section {
            Section::Header => {
                let header = self
                    .header
                    .as_deref_mut()
                    .ok_or_else(|| "Unexpected header.".to_string())?;
                header.set_value_by_name(0, key.as_str(), s).map_err(|e| {
                    format!("Cannot parse header key '{}' with value '{}' ({})", key, s, e)
                })?;
                self.stats.header_fields_set += 1;
            }
            Section::Data => {
                let table = self.data_table()?;
                let rows = table.row_count();
                if rows == 0 {
                    return Err("Data section has no active row.".to_string());
                }
                table.set_value_by_name(rows - 1, key.as_str(), s).map_err(|e| {
                    format!("Cannot parse data key '{}' with value '{}' ({})", key, s, e)
                })?;
                self.stats.data_fields_set += 1;
            }
        }

        Ok(())
    }

    fn data_table(&mut self) -> std::result::Result<&mut (dyn Table + 't), String> {
        self.table
            .as_deref_mut()
            .ok_or_else(|| "Table adapter is not set.".to_string())
    }
}
