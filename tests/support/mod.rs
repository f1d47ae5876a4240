//! テスト用のExcelフィクスチャ

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// セル値
#[allow(dead_code)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
    Empty,
}

/// 1シートのブックを書き出す（1行目はヘッダー）
pub fn write_sheet(path: &Path, header: &[&str], rows: &[Vec<Value<'_>>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name).unwrap();
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            match value {
                Value::Text(s) => {
                    worksheet.write_string(r, col as u16, *s).unwrap();
                }
                Value::Number(n) => {
                    worksheet.write_number(r, col as u16, *n).unwrap();
                }
                Value::Empty => {}
            }
        }
    }

    workbook.save(path).unwrap();
}

/// 照合テスト用のソース表（説明文 + 金額）
#[allow(dead_code)]
pub fn write_sample_source(path: &Path) {
    use Value::*;
    write_sheet(
        path,
        &["Description", "Amount"],
        &[
            vec![Text("Office supplies purchase 150.00"), Number(150.0)],
            vec![Text("Software license renewal"), Number(299.99)],
            vec![Text("Marketing campaign Q1 500"), Number(500.0)],
            vec![Text("Travel expenses"), Number(200.0)],
            vec![Text("Unknown transaction"), Number(100.0)],
        ],
    );
}

/// 照合テスト用の参照表（説明文 + コード）
#[allow(dead_code)]
pub fn write_sample_reference(path: &Path) {
    use Value::*;
    write_sheet(
        path,
        &["Description", "Code"],
        &[
            vec![Text("Office supplies and stationery 150"), Text("SUPP-001")],
            vec![Text("Software licensing fees"), Text("SOFT-002")],
            vec![Text("Marketing and advertising expenses 500"), Text("MRKT-004")],
            vec![Text("Travel and accommodation"), Text("TRAV-005")],
            vec![Text("Employee training"), Text("TRAIN-006")],
        ],
    );
}
