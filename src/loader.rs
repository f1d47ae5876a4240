//! Excel入力の読み込み
//!
//! 先頭シートの1行目をヘッダーとして扱い、指定列だけを取り出して
//! `SourceRecord` / `ReferenceRecord` に変換する。
//!
//! ## クリーニング
//! - 説明文・コードは前後の空白を除去
//! - 金額は数値に変換できなければ 0
//! - 説明文（参照側はコードも）が空の行は除外

use crate::error::{MatchError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use fuzzy_match_common::{ReferenceRecord, SourceRecord};
use std::path::Path;

/// ソースデータ（説明文 + 金額）を読み込む
pub fn load_source_data(path: &Path, desc_col: &str, amount_col: &str) -> Result<Vec<SourceRecord>> {
    let range = read_first_sheet(path)?;
    let (desc_idx, amount_idx) = locate_columns(&range, path, desc_col, amount_col)?;

    let total = range.height().saturating_sub(1);
    tracing::info!("Loaded {} rows from source file: {}", total, path.display());

    let records: Vec<SourceRecord> = range
        .rows()
        .skip(1)
        .map(|row| SourceRecord {
            description: cell_text(row.get(desc_idx)),
            amount: cell_amount(row.get(amount_idx)),
        })
        .filter(|r| !r.description.is_empty())
        .collect();

    tracing::info!("Cleaned data: {} valid rows", records.len());
    Ok(records)
}

/// 参照データ（説明文 + コード）を読み込む
pub fn load_reference_data(path: &Path, desc_col: &str, code_col: &str) -> Result<Vec<ReferenceRecord>> {
    let range = read_first_sheet(path)?;
    let (desc_idx, code_idx) = locate_columns(&range, path, desc_col, code_col)?;

    let total = range.height().saturating_sub(1);
    tracing::info!("Loaded {} rows from reference file: {}", total, path.display());

    let records: Vec<ReferenceRecord> = range
        .rows()
        .skip(1)
        .map(|row| ReferenceRecord {
            description: cell_text(row.get(desc_idx)),
            code: cell_text(row.get(code_idx)),
        })
        .filter(|r| !r.description.is_empty() && !r.code.is_empty())
        .collect();

    tracing::info!("Cleaned reference data: {} valid rows", records.len());
    Ok(records)
}

fn read_first_sheet(path: &Path) -> Result<Range<Data>> {
    if !path.exists() {
        return Err(MatchError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| MatchError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| MatchError::ExcelRead(format!("{}: シートがありません", path.display())))?
        .map_err(|e| MatchError::ExcelRead(format!("{}: {}", path.display(), e)))
}

/// ヘッダー行から2列の位置を探す
fn locate_columns(range: &Range<Data>, path: &Path, first: &str, second: &str) -> Result<(usize, usize)> {
    let header: Vec<String> = range
        .rows()
        .next()
        .map(|row| row.iter().map(|c| cell_text(Some(c))).collect())
        .unwrap_or_default();

    let find = |name: &str| header.iter().position(|h| h == name);

    match (find(first), find(second)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(MatchError::MissingColumn {
            file: path.display().to_string(),
            columns: format!("{} / {}", first, second),
        }),
    }
}

/// セルを文字列化（空セル・範囲外は空文字）
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

/// セルを金額に変換（変換不能・非有限値は 0）
fn cell_amount(cell: Option<&Data>) -> f64 {
    let value = match cell {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        Some(Data::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
