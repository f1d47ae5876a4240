//! 数値を考慮したスコアリング
//!
//! テキスト類似度（0-100）に金額の整合性による加減点を合成し、
//! 最終スコアと信頼度区分を求める。
//!
//! ## 合成ルール
//! - 整合あり: `min(100, text + numeric)`
//! - 整合なし: `max(0, text - 50)`

use crate::numbers::extract_numbers;
use crate::types::{MatchDetails, MatchType};
use serde::{Deserialize, Serialize};

/// 金額不一致時の減点
pub const MISMATCH_PENALTY: f64 = -50.0;

/// スコアラー設定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scorer {
    /// 許容誤差（ソース金額に対する%）
    pub amount_tolerance_percent: f64,
    /// 金額完全一致時の加点（許容誤差内一致の上限でもある）
    pub exact_match_bonus: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            amount_tolerance_percent: 5.0,
            exact_match_bonus: 20.0,
        }
    }
}

/// 金額整合チェックの結果
#[derive(Debug, Clone, PartialEq)]
pub struct NumericCheck {
    pub is_consistent: bool,
    pub score: f64,
    pub explanation: String,
}

impl Scorer {
    pub fn new(amount_tolerance_percent: f64, exact_match_bonus: f64) -> Self {
        Self {
            amount_tolerance_percent,
            exact_match_bonus,
        }
    }

    /// ソース金額と参照説明文中の数値の整合をチェック
    ///
    /// 数値は左から順に調べ、最初に条件を満たしたものを採用する
    /// （最も近い数値ではない）。
    pub fn check_numeric_consistency(&self, source_amount: f64, ref_description: &str) -> NumericCheck {
        let ref_numbers = extract_numbers(ref_description);

        // 数値のない参照行は中立扱い
        if ref_numbers.is_empty() {
            return NumericCheck {
                is_consistent: true,
                score: 0.0,
                explanation: "No numbers in reference description".to_string(),
            };
        }

        let tolerance = (source_amount * self.amount_tolerance_percent / 100.0).abs();

        for &ref_num in &ref_numbers {
            let diff = (source_amount - ref_num).abs();

            if diff == 0.0 {
                return NumericCheck {
                    is_consistent: true,
                    score: self.exact_match_bonus,
                    explanation: format!("Exact numeric match: {:?}", source_amount),
                };
            }

            if diff <= tolerance {
                let score = if tolerance > 0.0 {
                    self.exact_match_bonus * (1.0 - diff / tolerance)
                } else {
                    0.0
                };
                return NumericCheck {
                    is_consistent: true,
                    score,
                    explanation: format!(
                        "Numeric match within {}% tolerance",
                        self.amount_tolerance_percent
                    ),
                };
            }
        }

        NumericCheck {
            is_consistent: false,
            score: MISMATCH_PENALTY,
            explanation: format!(
                "Numeric mismatch: {:?} not found in {:?}",
                source_amount, ref_numbers
            ),
        }
    }

    /// 語順を無視したテキスト類似度（0-100）
    pub fn calculate_text_similarity(&self, source_desc: &str, ref_desc: &str) -> f64 {
        token_sort_ratio(source_desc, ref_desc)
    }

    /// テキスト類似度と金額整合を合成した最終スコアを計算
    pub fn calculate_final_score(
        &self,
        source_desc: &str,
        source_amount: f64,
        ref_desc: &str,
    ) -> (f64, MatchDetails) {
        let text_score = self.calculate_text_similarity(source_desc, ref_desc);
        let numeric = self.check_numeric_consistency(source_amount, ref_desc);

        let final_score = if numeric.is_consistent {
            (text_score + numeric.score).min(100.0)
        } else {
            (text_score + numeric.score).max(0.0)
        };

        let details = MatchDetails {
            text_score,
            numeric_consistent: numeric.is_consistent,
            numeric_score: numeric.score,
            final_score,
            match_type: MatchType::from_score(final_score),
            explanation: numeric.explanation,
        };

        (final_score, details)
    }
}

/// 小文字化・空白分割・ソートした文字列同士の類似度
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    indel_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn sorted_tokens(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut tokens: Vec<&str> = lowered.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// 挿入・削除のみの編集距離に基づく正規化類似度（0-100）
///
/// `2 * LCS / (len(a) + len(b)) * 100`
pub fn indel_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();

    if total == 0 {
        return 100.0;
    }

    let lcs = lcs_length(&a_chars, &b_chars);
    200.0 * lcs as f64 / total as f64
}

/// 最長共通部分列の長さ（2行分のバッファで計算）
fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
