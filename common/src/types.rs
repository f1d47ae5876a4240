//! 照合データの型定義
//!
//! CLIとライブラリで共有される型:
//! - SourceRecord / ReferenceRecord: ローダーの出力（照合の入力）
//! - MatchDetails / MatchResult: スコアラー・マッチャーの出力
//! - ResultRow / AuditRecord: 結果表と監査ログの1行

use serde::{Deserialize, Serialize};

/// 照合できなかった行に付与するコード
pub const NO_MATCH_CODE: &str = "NO_MATCH";

/// ソース側の1行（説明文 + 金額）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub description: String,
    pub amount: f64,
}

impl SourceRecord {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// 参照側の1行（説明文 + コード）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub description: String,
    pub code: String,
}

impl ReferenceRecord {
    pub fn new(description: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            code: code.into(),
        }
    }
}

/// 信頼度区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    #[serde(rename = "High Confidence")]
    HighConfidence,
    #[serde(rename = "Medium Confidence")]
    MediumConfidence,
    #[serde(rename = "Low Confidence")]
    LowConfidence,
    #[serde(rename = "Poor Match")]
    PoorMatch,
    #[serde(rename = "No Match")]
    NoMatch,
}

impl MatchType {
    /// 表示順（レポートの内訳に使用）
    pub const ALL: [MatchType; 5] = [
        MatchType::HighConfidence,
        MatchType::MediumConfidence,
        MatchType::LowConfidence,
        MatchType::PoorMatch,
        MatchType::NoMatch,
    ];

    /// 最終スコアから区分を決定
    ///
    /// 境界値は上位区分に含まれる（90.0 は High Confidence）。
    /// `NoMatch` はここでは返さない。
    pub fn from_score(final_score: f64) -> Self {
        if final_score >= 90.0 {
            MatchType::HighConfidence
        } else if final_score >= 70.0 {
            MatchType::MediumConfidence
        } else if final_score >= 50.0 {
            MatchType::LowConfidence
        } else {
            MatchType::PoorMatch
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchType::HighConfidence => "High Confidence",
            MatchType::MediumConfidence => "Medium Confidence",
            MatchType::LowConfidence => "Low Confidence",
            MatchType::PoorMatch => "Poor Match",
            MatchType::NoMatch => "No Match",
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 1組（ソース行 × 参照行）の採点内訳
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub text_score: f64,
    pub numeric_consistent: bool,
    pub numeric_score: f64,
    pub final_score: f64,
    pub match_type: MatchType,
    pub explanation: String,
}

impl MatchDetails {
    /// 参照行が1件もない場合の代替内訳
    pub fn no_match() -> Self {
        Self {
            text_score: 0.0,
            numeric_consistent: false,
            numeric_score: 0.0,
            final_score: 0.0,
            match_type: MatchType::NoMatch,
            explanation: "No match found above threshold".to_string(),
        }
    }
}

/// ソース1行に対する照合結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: bool,
    pub code: String,
    pub matched_description: String,
    pub score: f64,
    pub details: MatchDetails,
}

/// 結果表の1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Matched_Code")]
    pub matched_code: String,
    #[serde(rename = "Match_Score")]
    pub match_score: f64,
    #[serde(rename = "Match_Type")]
    pub match_type: MatchType,
}

impl ResultRow {
    pub const COLUMNS: [&'static str; 5] = [
        "Description",
        "Amount",
        "Matched_Code",
        "Match_Score",
        "Match_Type",
    ];

    pub fn is_matched(&self) -> bool {
        self.matched_code != NO_MATCH_CODE
    }
}

/// 監査ログの1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    #[serde(rename = "Source_Description")]
    pub source_description: String,
    #[serde(rename = "Source_Amount")]
    pub source_amount: f64,
    #[serde(rename = "Matched_Description")]
    pub matched_description: String,
    #[serde(rename = "Matched_Code")]
    pub matched_code: String,
    #[serde(rename = "Text_Match_Score")]
    pub text_match_score: f64,
    #[serde(rename = "Numeric_Match")]
    pub numeric_match: bool,
    #[serde(rename = "Final_Score")]
    pub final_score: f64,
    #[serde(rename = "Match_Type")]
    pub match_type: MatchType,
    #[serde(rename = "Explanation")]
    pub explanation: String,
}

impl AuditRecord {
    pub const COLUMNS: [&'static str; 9] = [
        "Source_Description",
        "Source_Amount",
        "Matched_Description",
        "Matched_Code",
        "Text_Match_Score",
        "Numeric_Match",
        "Final_Score",
        "Match_Type",
        "Explanation",
    ];
}

/// 小数第2位で丸める
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
