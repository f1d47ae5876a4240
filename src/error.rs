use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("パラメータが不正: {0}")]
    InvalidParameter(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("必要な列 {columns} が見つかりません: {file}")]
    MissingColumn { file: String, columns: String },

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelWrite(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] fuzzy_match_common::Error),
}

pub type Result<T> = std::result::Result<T, MatchError>;
