//! Problem-set document writer
//!
//! Mirrors the parser: header fields first, then a blank line and `data:`,
//! then one `- ` item per data row with the remaining fields indented under
//! the first one. Fields still holding their column default are skipped
//! unless `write_defaults` is set. Columns are written in registration order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::app::services::record_table::{Table, TableError};
use crate::constants::DATA_SECTION_MARKER;
use crate::{Error, Result};

/// Write one row of `table` as `key: value` lines
///
/// With `as_list_item` the row is preceded by a blank line and rendered as a
/// data record (`- first: ...` followed by indented fields). A data record
/// with nothing to write still gets its `-` marker so the row count survives
/// a round trip.
pub fn write_record<W: Write>(
    out: &mut W,
    table: &dyn Table,
    row: usize,
    write_defaults: bool,
    as_list_item: bool,
) -> Result<()> {
    if as_list_item {
        writeln!(out)?;
    }

    let mut value = String::new();
    let mut written = 0usize;

    for col in 0..table.column_count() {
        if !write_defaults && table.equals_default_value(row, col)? {
            continue;
        }

        let name = table.column_name(col).ok_or(TableError::ColumnOutOfRange {
            col,
            cols: table.column_count(),
        })?;
        table.get_value(row, col, &mut value)?;

        let prefix = match (as_list_item, written) {
            (false, _) => "",
            (true, 0) => "- ",
            (true, _) => "  ",
        };
        writeln!(out, "{prefix}{name}: {value}")?;
        written += 1;
    }

    if as_list_item && written == 0 {
        writeln!(out, "-")?;
    }

    Ok(())
}

/// Write a complete document: optional header record, marker, data rows
pub fn write_document<W: Write>(
    out: &mut W,
    header: Option<&dyn Table>,
    table: &dyn Table,
    write_defaults: bool,
) -> Result<()> {
    if let Some(header) = header {
        write_record(out, header, 0, write_defaults, false)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", DATA_SECTION_MARKER)?;

    for row in 0..table.row_count() {
        write_record(out, table, row, write_defaults, true)?;
    }

    Ok(())
}

/// Render a document into a string
pub fn document_to_string(header: Option<&dyn Table>, table: &dyn Table, write_defaults: bool) -> Result<String> {
    let mut buffer = Vec::new();
    write_document(&mut buffer, header, table, write_defaults)?;
    String::from_utf8(buffer).map_err(|e| Error::serialization(format!("Document is not valid UTF-8: {}", e)))
}

/// Write a document to `path`, optionally preceded by comment lines
///
/// `comments` is written verbatim; a trailing newline is added if missing.
pub fn write_document_to_file(
    path: &Path,
    header: Option<&dyn Table>,
    table: &dyn Table,
    write_defaults: bool,
    comments: Option<&str>,
) -> Result<()> {
    info!("Writing problem-set document: {}", path.display());

    let file = File::create(path)
        .map_err(|e| Error::io(format!("Cannot open output file '{}'", path.display()), e))?;
    let mut out = BufWriter::new(file);

    if let Some(comments) = comments {
        out.write_all(comments.as_bytes())?;
        if !comments.ends_with('\n') {
            writeln!(out)?;
        }
    }

    write_document(&mut out, header, table, write_defaults)?;
    out.flush()
        .map_err(|e| Error::io(format!("Failed to flush '{}'", path.display()), e))?;

    debug!("Wrote {} rows to {}", table.row_count(), path.display());
    Ok(())
}
