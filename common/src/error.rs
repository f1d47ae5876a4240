//! エラー型定義

use thiserror::Error;

/// 共通エラー型（xlsxバッファ生成の失敗）
#[derive(Error, Debug)]
pub enum Error {
    #[error("Excel error: {0}")]
    Excel(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "excel")]
impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        Error::Excel(e.to_string())
    }
}
