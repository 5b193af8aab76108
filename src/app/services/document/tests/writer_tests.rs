//! Tests for the document writer and default elision

use super::super::parser::{DocumentParser, ErrorMode};
use super::super::writer::{document_to_string, write_document_to_file, write_record};
use super::*;

fn render(header: &mut SampleHeader, rows: &mut Vec<SampleRow>, write_defaults: bool) -> String {
    let header_table = header_schema().bind_record(header);
    let row_table = rows_table(rows);
    document_to_string(Some(&header_table), &row_table, write_defaults).unwrap()
}

#[test]
fn test_default_fields_are_elided() {
    let mut header = SampleHeader {
        count: 2,
        title: String::new(),
    };
    let mut rows = vec![
        SampleRow {
            id: 1,
            answer: 4,
            weights: Vec::new(),
            note: String::new(),
            flag: false,
        },
        SampleRow {
            id: -1,
            answer: -1,
            weights: Vec::new(),
            note: String::new(),
            flag: false,
        },
    ];

    let text = render(&mut header, &mut rows, false);
    assert_eq!(text, "count: 2\n\ndata:\n\n- id: 1\n  answer: 4\n\n-\n");
}

#[test]
fn test_write_defaults_emits_every_column() {
    let mut header = SampleHeader {
        count: -1,
        title: "Set".to_string(),
    };
    let mut rows = vec![SampleRow {
        id: 3,
        answer: -1,
        weights: vec![5, -6],
        note: String::new(),
        flag: true,
    }];

    let text = render(&mut header, &mut rows, true);
    let expected = "count: -1\n\
                    title: \"Set\"\n\
                    \n\
                    data:\n\
                    \n\
                    - id: 3\n  \
                    answer: -1\n  \
                    weights: [5,-6]\n  \
                    note: \"\"\n  \
                    flag: yes\n";
    assert_eq!(text, expected);
}

#[test]
fn test_document_without_header() {
    let mut rows = vec![SampleRow {
        id: 1,
        answer: -1,
        weights: Vec::new(),
        note: String::new(),
        flag: false,
    }];
    let row_table = rows_table(&mut rows);

    let text = document_to_string(None, &row_table, false).unwrap();
    assert_eq!(text, "\ndata:\n\n- id: 1\n");
}

#[test]
fn test_empty_table_writes_only_marker() {
    let mut rows: Vec<SampleRow> = Vec::new();
    let row_table = rows_table(&mut rows);

    let text = document_to_string(None, &row_table, true).unwrap();
    assert_eq!(text, "\ndata:\n");
}

#[test]
fn test_write_record_as_plain_fields() {
    let mut rows = vec![SampleRow {
        id: 8,
        answer: 9,
        weights: Vec::new(),
        note: "n".to_string(),
        flag: false,
    }];
    let row_table = rows_table(&mut rows);

    let mut out = Vec::new();
    write_record(&mut out, &row_table, 0, false, false).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "id: 8\nanswer: 9\nnote: \"n\"\n");
}

#[test]
fn test_write_record_out_of_range_row() {
    let mut rows: Vec<SampleRow> = Vec::new();
    let row_table = rows_table(&mut rows);

    let mut out = Vec::new();
    assert!(write_record(&mut out, &row_table, 0, true, true).is_err());
}

#[test]
fn test_round_trip_preserves_records() {
    let first = parse_sample(sample_document(), ErrorMode::Strict);
    assert!(first.result.is_ok());

    let mut header = first.header.clone();
    let mut rows = first.rows.clone();
    let text = render(&mut header, &mut rows, false);

    let second = parse_sample(&text, ErrorMode::Strict);
    assert!(second.result.is_ok(), "{text}");
    assert_eq!(second.header, first.header);
    assert_eq!(second.rows, first.rows);
}

#[test]
fn test_round_trip_with_all_defaults_written() {
    let first = parse_sample(sample_document(), ErrorMode::Strict);
    let mut header = first.header.clone();
    let mut rows = first.rows.clone();
    let text = render(&mut header, &mut rows, true);

    let second = parse_sample(&text, ErrorMode::Strict);
    assert_eq!(second.header, first.header);
    assert_eq!(second.rows, first.rows);
    assert_eq!(second.result.unwrap().data_fields_set, 15);
}

#[test]
fn test_write_document_to_file_with_comments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.out");

    let mut header = SampleHeader {
        count: 1,
        title: String::new(),
    };
    let mut rows = vec![SampleRow {
        id: 1,
        answer: 12,
        weights: Vec::new(),
        note: String::new(),
        flag: false,
    }];

    {
        let header_table = header_schema().bind_record(&mut header);
        let row_table = rows_table(&mut rows);
        write_document_to_file(
            &path,
            Some(&header_table),
            &row_table,
            false,
            Some("# generated"),
        )
        .unwrap();
    }

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# generated\ncount: 1\n"));

    let mut parsed_rows = Vec::new();
    {
        let mut row_table = rows_table(&mut parsed_rows);
        let mut parser = DocumentParser::new();
        parser.set_data_table(&mut row_table);
        // The header line has no table to land in
        assert!(parser.parse_file(&path, ErrorMode::Strict).is_err());
    }

    let parsed = parse_sample(&content, ErrorMode::Strict);
    assert!(parsed.result.is_ok());
    assert_eq!(parsed.header.count, 1);
    assert_eq!(parsed.rows, rows);
}

#[test]
fn test_write_document_to_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("results.out");

    let mut rows: Vec<SampleRow> = Vec::new();
    let row_table = rows_table(&mut rows);
    let result = write_document_to_file(&path, None, &row_table, false, None);
    assert!(matches!(result, Err(crate::Error::Io { .. })));
}
