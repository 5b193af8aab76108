//! Test utilities for the record table framework
//!
//! Provides a small record type with one field of every supported codec type,
//! shared by the table and codec tests.

use super::table::{RecordTable, VecTable};


/// Record exercising every supported field type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleRecord {
    pub id: i32,
    pub enabled: bool,
    pub label: String,
    pub values: Vec<i32>,
}

/// Register the standard sample columns on a growable table
pub fn sample_rows_table(rows: &mut Vec<SampleRecord>) -> VecTable<'_, SampleRecord> {
    let mut table = VecTable::new(rows);
    assert!(table.add_column("id", |r| &r.id, |r| &mut r.id));
    assert!(table.add_column_with_default("enabled", |r| &r.enabled, |r| &mut r.enabled, true));
    assert!(table.add_column("label", |r| &r.label, |r| &mut r.label));
    assert!(table.add_column("values", |r| &r.values, |r| &mut r.values));
    table
}

/// Register the standard sample columns on a single-record table
pub fn sample_record_table(record: &mut SampleRecord) -> RecordTable<'_, SampleRecord> {
    let mut table = RecordTable::new(record);
    assert!(table.add_column("id", |r| &r.id, |r| &mut r.id));
    assert!(table.add_column_with_default("enabled", |r| &r.enabled, |r| &mut r.enabled, true));
    assert!(table.add_column("label", |r| &r.label, |r| &mut r.label));
    assert!(table.add_column("values", |r| &r.values, |r| &mut r.values));
    table
}
