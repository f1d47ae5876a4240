//! 説明文からの数値抽出
//!
//! 単語境界は見ない。"Q1" からは 1 が取れる。
//! 全角やその他の Unicode 十進数字も ASCII に直してから数値化する。

use regex::Regex;

lazy_static::lazy_static! {
    // 整数または小数（先頭のマイナス記号は任意）
    static ref NUMBER_RE: Regex = Regex::new(r"-?\d+\.?\d*").unwrap();
    // Unicode の十進数字（一般カテゴリ Nd）1文字
    static ref DIGIT_RE: Regex = Regex::new(r"^\d$").unwrap();
}

/// テキストに含まれる数値を出現順に抽出
///
/// # Examples
/// ```
/// use fuzzy_match_common::extract_numbers;
///
/// assert_eq!(extract_numbers("Marketing campaign Q1 500"), vec![1.0, 500.0]);
/// assert_eq!(extract_numbers("事務用品 １５０"), vec![150.0]);
/// assert!(extract_numbers("No numbers here").is_empty());
/// ```
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER_RE
        .find_iter(text)
        .filter_map(|m| {
            let parsed = to_ascii_number(m.as_str()).and_then(|s| s.parse::<f64>().ok());
            if parsed.is_none() {
                tracing::warn!("Skipping unparsable number {:?} in {:?}", m.as_str(), text);
            }
            parsed
        })
        .collect()
}

/// 数字を ASCII に揃える（変換できない文字があれば None）
fn to_ascii_number(matched: &str) -> Option<String> {
    matched
        .chars()
        .map(|c| match c {
            '-' | '.' => Some(c),
            _ => ascii_digit(c),
        })
        .collect()
}

/// 十進数字1文字を ASCII の '0'〜'9' に変換
fn ascii_digit(c: char) -> Option<char> {
    match c {
        '0'..='9' => Some(c),
        '０'..='９' => char::from_digit(c as u32 - '０' as u32, 10),
        _ if is_decimal_digit(c) => {
            // Nd は 0〜9 が連続した10文字単位で並ぶので、並びの先頭からの距離が値になる
            let mut first = c as u32;
            while let Some(prev) = first.checked_sub(1).and_then(char::from_u32) {
                if !is_decimal_digit(prev) {
                    break;
                }
                first -= 1;
            }
            char::from_digit((c as u32 - first) % 10, 10)
        }
        _ => None,
    }
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}
