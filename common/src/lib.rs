//! Fuzzy Match Common Library
//!
//! 数値を考慮したファジーマッチングの中核（I/Oなし）
//!
//! - `numbers`: 説明文からの数値抽出
//! - `scorer`: テキスト類似度 + 金額整合のスコアリング
//! - `matcher`: ソース表 × 参照表の照合と監査ログ
//! - `report`: 結果表からのサマリー集計

pub mod types;
pub mod numbers;
pub mod scorer;
pub mod matcher;
pub mod report;
pub mod error;
pub mod export;

pub use types::{
    AuditRecord, MatchDetails, MatchResult, MatchType, ReferenceRecord, ResultRow, SourceRecord,
    NO_MATCH_CODE,
};
pub use numbers::extract_numbers;
pub use scorer::{NumericCheck, Scorer};
pub use matcher::{MatchRun, MatchSettings, Matcher};
pub use report::{generate_summary_report, ReportStats};
pub use error::{Error, Result};
