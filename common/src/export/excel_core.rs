//! Excel生成（共通ライブラリ）
//!
//! 結果表・監査ログをxlsxバッファに書き出す。ファイル保存は呼び出し側で行う。

use crate::error::Result;
use crate::types::{AuditRecord, ResultRow};
use rust_xlsxwriter::*;

/// 監査ログのシート名
pub const AUDIT_SHEET_NAME: &str = "Audit Log";

/// 監査ログの列幅上限
const MAX_COLUMN_WIDTH: usize = 50;

/// セル値
enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
}

impl Cell<'_> {
    fn display_len(&self) -> usize {
        match self {
            Cell::Text(s) => s.chars().count(),
            Cell::Number(n) => format!("{:?}", n).len(),
            Cell::Bool(true) => 4,
            Cell::Bool(false) => 5,
        }
    }
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_background_color(Color::RGB(0xF5F5F5))
}

fn write_header(worksheet: &mut Worksheet, columns: &[&str]) -> Result<()> {
    let format = header_format();
    for (col, name) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &format)?;
    }
    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell<'_>) -> Result<()> {
    match cell {
        Cell::Text(s) => worksheet.write_string(row, col, *s)?,
        Cell::Number(n) => worksheet.write_number(row, col, *n)?,
        Cell::Bool(b) => worksheet.write_boolean(row, col, *b)?,
    };
    Ok(())
}

fn result_cells(row: &ResultRow) -> [Cell<'_>; 5] {
    [
        Cell::Text(&row.description),
        Cell::Number(row.amount),
        Cell::Text(&row.matched_code),
        Cell::Number(row.match_score),
        Cell::Text(row.match_type.label()),
    ]
}

fn audit_cells(record: &AuditRecord) -> [Cell<'_>; 9] {
    [
        Cell::Text(&record.source_description),
        Cell::Number(record.source_amount),
        Cell::Text(&record.matched_description),
        Cell::Text(&record.matched_code),
        Cell::Number(record.text_match_score),
        Cell::Bool(record.numeric_match),
        Cell::Number(record.final_score),
        Cell::Text(record.match_type.label()),
        Cell::Text(&record.explanation),
    ]
}

/// 結果表をxlsxバッファに生成
pub fn generate_results_buffer(rows: &[ResultRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Results")?;

    write_header(worksheet, &ResultRow::COLUMNS)?;

    for (i, row) in rows.iter().enumerate() {
        let excel_row = i as u32 + 1;
        for (col, cell) in result_cells(row).iter().enumerate() {
            write_cell(worksheet, excel_row, col as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// 監査ログをxlsxバッファに生成
///
/// 列幅は内容の最大文字数 + 2（上限50）に合わせる。
pub fn generate_audit_buffer(records: &[AuditRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(AUDIT_SHEET_NAME)?;

    write_header(worksheet, &AuditRecord::COLUMNS)?;

    let mut widths: Vec<usize> = AuditRecord::COLUMNS.iter().map(|c| c.chars().count()).collect();

    for (i, record) in records.iter().enumerate() {
        let excel_row = i as u32 + 1;
        for (col, cell) in audit_cells(record).iter().enumerate() {
            write_cell(worksheet, excel_row, col as u16, cell)?;
            widths[col] = widths[col].max(cell.display_len());
        }
    }

    for (col, max_len) in widths.iter().enumerate() {
        let width = (max_len + 2).min(MAX_COLUMN_WIDTH);
        worksheet.set_column_width(col as u16, width as f64)?;
    }

    Ok(workbook.save_to_buffer()?)
}
