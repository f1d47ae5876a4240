//! エラーケーステスト
//!
//! エラー型の変換と表示、設定ファイルの異常系を検証

use fuzzy_match_rust::config::Config;
use fuzzy_match_rust::error::MatchError;
use tempfile::tempdir;

/// 共通ライブラリのエラーは透過的に変換される
#[test]
fn test_common_error_is_transparent() {
    let inner = fuzzy_match_common::Error::Excel("sheet name too long".into());
    let message = inner.to_string();
    let err: MatchError = inner.into();

    assert!(matches!(err, MatchError::Common(_)));
    assert_eq!(err.to_string(), message);
    assert_eq!(err.to_string(), "Excel error: sheet name too long");
}

/// 出力先がディレクトリの場合は書き込みエラー
#[test]
fn test_save_results_to_directory_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = fuzzy_match_rust::export::excel::save_results(&[], dir.path());
    assert!(matches!(result, Err(MatchError::ExcelWrite(_))));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: MatchError = io.into();
    assert!(matches!(err, MatchError::Io(_)));
    assert!(err.to_string().contains("denied"));
}

#[test]
fn test_missing_column_message() {
    let err = MatchError::MissingColumn {
        file: "source.xlsx".into(),
        columns: "Description / Amount".into(),
    };
    let message = err.to_string();
    assert!(message.contains("source.xlsx"));
    assert!(message.contains("Description / Amount"));
}

/// 壊れた設定ファイルはJSONエラーになる
#[test]
fn test_load_broken_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(MatchError::JsonParse(_))));
}

/// 範囲外の閾値は読み込み時に弾かれる
#[test]
fn test_load_config_invalid_threshold() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "matching": { "threshold": -5 } }"#).unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(MatchError::InvalidParameter(_))));
}
