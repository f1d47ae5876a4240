pub mod excel;

use crate::error::Result;
use std::path::Path;

/// 出力先の親ディレクトリを作成
pub fn ensure_output_directory(output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
            tracing::debug!("Output directory ensured: {}", parent.display());
        }
    }
    Ok(())
}
