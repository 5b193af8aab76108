//! Table abstraction over typed records
//!
//! A table maps named, case-insensitive column keys onto fields of a record
//! type. Two shapes exist:
//! - [`RecordTable`] wraps exactly one record (a document header)
//! - [`VecTable`] wraps a growable list of records (the data rows)
//!
//! Both borrow their storage and share the column definitions held by a
//! [`TableSchema`]. Consumers that do not care about the record type (the
//! document parser and writer) work through the object-safe [`Table`] trait.

use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use super::codec::{CodecError, FieldCodec};
use super::field::{Field, FieldAdapter};
use super::segment::Segment;

/// Structural failures when reading or writing table cells
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("table has a fixed number of rows")]
    FixedSize,

    #[error("row {row} is out of range (table has {rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("column {col} is out of range (table has {cols} columns)")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("invalid value for column '{column}': {source}")]
    InvalidValue { column: String, source: CodecError },
}

/// A named column and the adapter for the field behind it
pub struct ColumnSpec<T> {
    pub name: String,
    pub field: Rc<dyn FieldAdapter<T>>,
}

impl<T> Clone for ColumnSpec<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            field: Rc::clone(&self.field),
        }
    }
}

/// Ordered column definitions for a record type
///
/// Columns keep their registration order, which is also the order the
/// document writer emits them in.
pub struct TableSchema<T> {
    columns: Vec<ColumnSpec<T>>,
    name_to_index: HashMap<String, usize>,
}

impl<T> Default for TableSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TableSchema<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            name_to_index: self.name_to_index.clone(),
        }
    }
}

impl<T> std::fmt::Debug for TableSchema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.columns.iter().map(|c| &c.name))
            .finish()
    }
}

impl<T> TableSchema<T> {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            name_to_index: HashMap::new(),
        }
    }

    /// Register a column backed by an existing adapter
    ///
    /// Returns `false` and leaves the schema untouched when a column with the
    /// same name (ignoring ASCII case) already exists.
    pub fn add_field(&mut self, name: &str, field: Rc<dyn FieldAdapter<T>>) -> bool {
        let key = name.to_ascii_lowercase();
        if self.name_to_index.contains_key(&key) {
            return false;
        }

        self.columns.push(ColumnSpec {
            name: name.to_string(),
            field,
        });
        self.name_to_index.insert(key, self.columns.len() - 1);
        true
    }

    /// Register a column using the codec's default value (`-1` for integers)
    pub fn add_column<C>(&mut self, name: &str, get: fn(&T) -> &C, get_mut: fn(&mut T) -> &mut C) -> bool
    where
        T: 'static,
        C: FieldCodec + PartialEq + Clone + 'static,
    {
        self.add_column_with_default(name, get, get_mut, C::column_default())
    }

    /// Register a column with an explicit default value
    pub fn add_column_with_default<C>(
        &mut self,
        name: &str,
        get: fn(&T) -> &C,
        get_mut: fn(&mut T) -> &mut C,
        default_value: C,
    ) -> bool
    where
        T: 'static,
        C: FieldCodec + PartialEq + Clone + 'static,
    {
        self.add_field(name, Rc::new(Field::new(get, get_mut, default_value)))
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, col: usize) -> Option<&ColumnSpec<T>> {
        self.columns.get(col)
    }

    pub fn column_name(&self, col: usize) -> Option<&str> {
        self.columns.get(col).map(|c| c.name.as_str())
    }

    /// Case-insensitive column lookup
    pub fn column_by_name(&self, key: &str) -> Option<usize> {
        self.name_to_index.get(&key.to_ascii_lowercase()).copied()
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnSpec<T>> {
        self.columns.iter()
    }

    /// Reset every column's field in `record` to its declared default
    pub fn apply_defaults(&self, record: &mut T) {
        for spec in &self.columns {
            spec.field.set_default_value(record);
        }
    }

    pub fn read_cell(&self, record: &T, col: usize, out: &mut String) -> Result<(), TableError> {
        let spec = self.spec(col)?;
        out.clear();
        spec.field.to_text(record, out);
        Ok(())
    }

    pub fn write_cell(&self, record: &mut T, col: usize, value: Segment<'_>) -> Result<(), TableError> {
        let spec = self.spec(col)?;
        spec.field
            .from_segment(record, value)
            .map_err(|source| TableError::InvalidValue {
                column: spec.name.clone(),
                source,
            })
    }

    pub fn cell_equals_default(&self, record: &T, col: usize) -> Result<bool, TableError> {
        Ok(self.spec(col)?.field.equals_default_value(record))
    }

    /// Bind the schema to a single record
    pub fn bind_record(self, record: &mut T) -> RecordTable<'_, T> {
        RecordTable::with_schema(record, self)
    }

    /// Bind the schema to a growable list of records
    pub fn bind_rows(self, rows: &mut Vec<T>) -> VecTable<'_, T> {
        VecTable::with_schema(rows, self)
    }

    fn spec(&self, col: usize) -> Result<&ColumnSpec<T>, TableError> {
        self.columns.get(col).ok_or(TableError::ColumnOutOfRange {
            col,
            cols: self.columns.len(),
        })
    }
}

/// Row and column access independent of the record type
pub trait Table {
    /// Append a row with every column at its default; returns the new index
    fn new_row(&mut self) -> Result<usize, TableError>;

    fn set_default_values(&mut self, row: usize) -> Result<(), TableError>;

    fn is_fixed_size(&self) -> bool;

    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    fn column_name(&self, col: usize) -> Option<&str>;

    fn column_by_name(&self, key: &str) -> Option<usize>;

    /// Encode a cell into `out`, replacing its previous contents
    fn get_value(&self, row: usize, col: usize, out: &mut String) -> Result<(), TableError>;

    fn set_value(&mut self, row: usize, col: usize, value: Segment<'_>) -> Result<(), TableError>;

    fn equals_default_value(&self, row: usize, col: usize) -> Result<bool, TableError>;

    fn get_value_by_name(&self, row: usize, key: &str, out: &mut String) -> Result<(), TableError> {
        let col = self
            .column_by_name(key)
            .ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
        self.get_value(row, col, out)
    }

    fn set_value_by_name(&mut self, row: usize, key: &str, value: Segment<'_>) -> Result<(), TableError> {
        let col = self
            .column_by_name(key)
            .ok_or_else(|| TableError::UnknownColumn(key.to_string()))?;
        self.set_value(row, col, value)
    }
}

/// Table over exactly one externally owned record
pub struct RecordTable<'a, T> {
    schema: TableSchema<T>,
    record: &'a mut T,
}

impl<'a, T> RecordTable<'a, T> {
    pub fn new(record: &'a mut T) -> Self {
        Self::with_schema(record, TableSchema::new())
    }

    pub fn with_schema(record: &'a mut T, schema: TableSchema<T>) -> Self {
        Self { schema, record }
    }

    pub fn add_column<C>(&mut self, name: &str, get: fn(&T) -> &C, get_mut: fn(&mut T) -> &mut C) -> bool
    where
        T: 'static,
        C: FieldCodec + PartialEq + Clone + 'static,
    {
        self.schema.add_column(name, get, get_mut)
    }

    pub fn add_column_with_default<C>(
        &mut self,
        name: &str,
        get: fn(&T) -> &C,
        get_mut: fn(&mut T) -> &mut C,
        default_value: C,
    ) -> bool
    where
        T: 'static,
        C: FieldCodec + PartialEq + Clone + 'static,
    {
        self.schema
            .add_column_with_default(name, get, get_mut, default_value)
    }

    pub fn schema(&self) -> &TableSchema<T> {
        &self.schema
    }

    pub fn record(&self) -> &T {
        &*self.record
    }

    pub fn record_mut(&mut self) -> &mut T {
        &mut *self.record
    }

    /// Release the borrow on the record, keeping the column definitions
    pub fn into_schema(self) -> TableSchema<T> {
        self.schema
    }

    fn check_row(&self, row: usize) -> Result<(), TableError> {
        if row == 0 {
            Ok(())
        } else {
            Err(TableError::RowOutOfRange { row, rows: 1 })
        }
    }
}

impl<T> Table for RecordTable<'_, T> {
    fn new_row(&mut self) -> Result<usize, TableError> {
        Err(TableError::FixedSize)
    }

    fn set_default_values(&mut self, row: usize) -> Result<(), TableError> {
        self.check_row(row)?;
        self.schema.apply_defaults(&mut *self.record);
        Ok(())
    }

    fn is_fixed_size(&self) -> bool {
        true
    }

    fn row_count(&self) -> usize {
        1
    }

    fn column_count(&self) -> usize {
        self.schema.column_count()
    }

    fn column_name(&self, col: usize) -> Option<&str> {
        self.schema.column_name(col)
    }

    fn column_by_name(&self, key: &str) -> Option<usize> {
        self.schema.column_by_name(key)
    }

    fn get_value(&self, row: usize, col: usize, out: &mut String) -> Result<(), TableError> {
        self.check_row(row)?;
        self.schema.read_cell(&*self.record, col, out)
    }

    fn set_value(&mut self, row: usize, col: usize, value: Segment<'_>) -> Result<(), TableError> {
        self.check_row(row)?;
        self.schema.write_cell(&mut *self.record, col, value)
    }

    fn equals_default_value(&self, row: usize, col: usize) -> Result<bool, TableError> {
        self.check_row(row)?;
        self.schema.cell_equals_default(&*self.record, col)
    }
}

/// Append-only table over an externally owned list of records
pub struct VecTable<'a, T> {
    schema: TableSchema<T>,
    rows: &'a mut Vec<T>,
}

impl<'a, T> VecTable<'a, T> {
    pub fn new(rows: &'a mut Vec<T>) -> Self {
        Self::with_schema(rows, TableSchema::new())
    }

    pub fn with_schema(rows: &'a mut Vec<T>, schema: TableSchema<T>) -> Self {
        Self { schema, rows }
    }

    pub fn add_column<C>(&mut self, name: &str, get: fn(&T) -> &C, get_mut: fn(&mut T) -> &mut C) -> bool
    where
        T: 'static,
        C: FieldCodec + PartialEq + Clone + 'static,
    {
        self.schema.add_column(name, get, get_mut)
    }

    pub fn add_column_with_default<C>(
        &mut self,
        name: &str,
        get: fn(&T) -> &C,
        get_mut: fn(&mut T) -> &mut C,
        default_value: C,
    ) -> bool
    where
        T: 'static,
        C: FieldCodec + PartialEq + Clone + 'static,
    {
        self.schema
            .add_column_with_default(name, get, get_mut, default_value)
    }

    pub fn schema(&self) -> &TableSchema<T> {
        &self.schema
    }

    pub fn rows(&self) -> &[T] {
        self.rows.as_slice()
    }

    pub fn rows_mut(&mut self) -> &mut [T] {
        self.rows.as_mut_slice()
    }

    /// Release the borrow on the rows, keeping the column definitions
    pub fn into_schema(self) -> TableSchema<T> {
        self.schema
    }

    fn row(&self, row: usize) -> Result<&T, TableError> {
        let rows = self.rows.len();
        self.rows.get(row).ok_or(TableError::RowOutOfRange { row, rows })
    }
}

impl<T: Default> Table for VecTable<'_, T> {
    fn new_row(&mut self) -> Result<usize, TableError> {
        let mut record = T::default();
        self.schema.apply_defaults(&mut record);
        self.rows.push(record);
        Ok(self.rows.len() - 1)
    }

    fn set_default_values(&mut self, row: usize) -> Result<(), TableError> {
        let rows = self.rows.len();
        let record = self
            .rows
            .get_mut(row)
            .ok_or(TableError::RowOutOfRange { row, rows })?;
        self.schema.apply_defaults(record);
        Ok(())
    }

    fn is_fixed_size(&self) -> bool {
        false
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.schema.column_count()
    }

    fn column_name(&self, col: usize) -> Option<&str> {
        self.schema.column_name(col)
    }

    fn column_by_name(&self, key: &str) -> Option<usize> {
        self.schema.column_by_name(key)
    }

    fn get_value(&self, row: usize, col: usize, out: &mut String) -> Result<(), TableError> {
        let record = self.row(row)?;
        self.schema.read_cell(record, col, out)
    }

    fn set_value(&mut self, row: usize, col: usize, value: Segment<'_>) -> Result<(), TableError> {
        let rows = self.rows.len();
        let record = self
            .rows
            .get_mut(row)
            .ok_or(TableError::RowOutOfRange { row, rows })?;
        self.schema.write_cell(record, col, value)
    }

    fn equals_default_value(&self, row: usize, col: usize) -> Result<bool, TableError> {
        let record = self.row(row)?;
        self.schema.cell_equals_default(record, col)
    }
}
