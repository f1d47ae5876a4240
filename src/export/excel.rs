//! Excel出力（CLI版）
//!
//! ブック本体は共通ライブラリで生成し、ここではファイルに保存する。

use crate::error::{MatchError, Result};
use fuzzy_match_common::export::excel_core;
use fuzzy_match_common::{AuditRecord, ResultRow};
use std::path::Path;

/// 結果表を保存
pub fn save_results(rows: &[ResultRow], output_path: &Path) -> Result<()> {
    let buffer = excel_core::generate_results_buffer(rows)?;
    write_file(output_path, &buffer)?;
    tracing::info!("Results saved to: {}", output_path.display());
    Ok(())
}

/// 監査ログを保存（シート名 "Audit Log"）
pub fn save_audit_log(records: &[AuditRecord], output_path: &Path) -> Result<()> {
    let buffer = excel_core::generate_audit_buffer(records)?;
    write_file(output_path, &buffer)?;
    tracing::info!("Audit log saved to: {}", output_path.display());
    Ok(())
}

fn write_file(output_path: &Path, buffer: &[u8]) -> Result<()> {
    super::ensure_output_directory(output_path)?;
    std::fs::write(output_path, buffer).map_err(|e| {
        MatchError::ExcelWrite(format!("{}: {}", output_path.display(), e))
    })
}
