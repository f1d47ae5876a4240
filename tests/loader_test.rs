//! 入力読み込みテスト
//!
//! 実際のxlsxを書き出して読み込み、クリーニング規則を検証

mod support;

use fuzzy_match_rust::error::MatchError;
use fuzzy_match_rust::loader::{load_reference_data, load_source_data};
use support::{write_sheet, Value};
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_load_source_data() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("source.xlsx");
    write_sheet(
        &path,
        &["Description", "Amount"],
        &[
            vec![Value::Text("Office supplies"), Value::Number(150.0)],
            vec![Value::Text("Software license"), Value::Number(299.99)],
        ],
    );

    let records = load_source_data(&path, "Description", "Amount").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].description, "Office supplies");
    assert_eq!(records[0].amount, 150.0);
    assert_eq!(records[1].amount, 299.99);
}

#[test]
fn test_load_source_trims_and_drops_empty_rows() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("source.xlsx");
    write_sheet(
        &path,
        &["Description", "Amount"],
        &[
            vec![Value::Text("  Office supplies  "), Value::Number(150.0)],
            vec![Value::Empty, Value::Number(10.0)],
            vec![Value::Text("   "), Value::Number(20.0)],
            vec![Value::Text("Travel"), Value::Empty],
            vec![Value::Text("Training"), Value::Text("abc")],
        ],
    );

    let records = load_source_data(&path, "Description", "Amount").unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].description, "Office supplies");
    // 金額が空・非数値の行は 0 として残る
    assert_eq!(records[1].description, "Travel");
    assert_eq!(records[1].amount, 0.0);
    assert_eq!(records[2].amount, 0.0);
}

#[test]
fn test_load_source_extra_columns_any_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("source.xlsx");
    write_sheet(
        &path,
        &["Id", "Amount", "Description"],
        &[vec![Value::Number(1.0), Value::Number(42.0), Value::Text("Consulting")]],
    );

    let records = load_source_data(&path, "Description", "Amount").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].description, "Consulting");
    assert_eq!(records[0].amount, 42.0);
}

#[test]
fn test_load_source_missing_column() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("source.xlsx");
    write_sheet(
        &path,
        &["Description", "Other"],
        &[vec![Value::Text("Office supplies"), Value::Number(1.0)]],
    );

    let result = load_source_data(&path, "Description", "Amount");
    assert!(matches!(result, Err(MatchError::MissingColumn { .. })));
}

#[test]
fn test_load_source_file_not_found() {
    let result = load_source_data(Path::new("/nonexistent/path/source.xlsx"), "Description", "Amount");
    assert!(matches!(result, Err(MatchError::FileNotFound(_))));
}

#[test]
fn test_load_source_invalid_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"not an excel file").unwrap();

    let result = load_source_data(&path, "Description", "Amount");
    assert!(matches!(result, Err(MatchError::ExcelRead(_))));
}

#[test]
fn test_load_reference_data() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reference.xlsx");
    write_sheet(
        &path,
        &["Description", "Code"],
        &[
            vec![Value::Text("Office supplies"), Value::Text(" SUPP-001 ")],
            vec![Value::Text("Software licensing"), Value::Text("SOFT-002")],
        ],
    );

    let records = load_reference_data(&path, "Description", "Code").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].code, "SUPP-001");
    assert_eq!(records[1].description, "Software licensing");
}

#[test]
fn test_load_reference_drops_rows_without_code() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reference.xlsx");
    write_sheet(
        &path,
        &["Description", "Code"],
        &[
            vec![Value::Text("Office supplies"), Value::Text("SUPP-001")],
            vec![Value::Text("Software"), Value::Empty],
            vec![Value::Empty, Value::Text("MRKT-003")],
        ],
    );

    let records = load_reference_data(&path, "Description", "Code").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].code, "SUPP-001");
}

#[test]
fn test_load_reference_missing_column() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reference.xlsx");
    write_sheet(
        &path,
        &["Description", "Other"],
        &[vec![Value::Text("Office supplies"), Value::Text("SUPP-001")]],
    );

    let result = load_reference_data(&path, "Description", "Code");
    match result {
        Err(MatchError::MissingColumn { columns, .. }) => assert!(columns.contains("Code")),
        other => panic!("MissingColumn を期待: {:?}", other.map(|r| r.len())),
    }
}
