//! Parsing statistics for problem-set documents
//!
//! Counters collected while a document is read, reported by the CLI `check`
//! command and logged at debug level after every parse.

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Physical lines consumed (including blank and comment lines)
    pub lines_read: usize,

    /// Lines that were empty after trimming
    pub blank_lines: usize,

    /// Lines starting with `#`
    pub comment_lines: usize,

    /// Header fields assigned
    pub header_fields_set: usize,

    /// Data rows appended by `-` lines
    pub rows_appended: usize,

    /// Data fields assigned
    pub data_fields_set: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that carried a key, a row marker or the section marker
    pub fn content_lines(&self) -> usize {
        self.lines_read - self.blank_lines - self.comment_lines
    }
}
