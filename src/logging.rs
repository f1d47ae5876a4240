//! ログ初期化
//!
//! 標準エラーに出力し、指定があればログファイルにも同じ内容を追記する。

use crate::error::{MatchError, Result};
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::MakeWriterExt;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ログレベル文字列を解釈（"info", "DEBUG" など）
pub fn parse_level(level: &str) -> Result<Level> {
    Level::from_str(level.trim())
        .map_err(|_| MatchError::Config(format!("不明なログレベル: {}", level)))
}

/// グローバルなログ出力を設定
pub fn init(level: Level, log_file: Option<&Path>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(true)
        .with_level(true)
        .with_max_level(level);

    let result = match log_file {
        Some(path) => {
            crate::export::ensure_output_directory(path)?;
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            builder
                .with_ansi(false)
                .with_writer(std::io::stderr.and(Mutex::new(file)))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| MatchError::Config(format!("ログ初期化エラー: {}", e)))
}
