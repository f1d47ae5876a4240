//! ソース表と参照表の照合
//!
//! ソース1行ごとに参照表を全件走査し、最終スコアが最大の参照行を採用する。
//! 閾値未満なら `NO_MATCH` とする。結果表と監査ログは同じ順序・同じ件数で返す。

use crate::scorer::Scorer;
use crate::types::{
    round2, AuditRecord, MatchDetails, MatchResult, ReferenceRecord, ResultRow, SourceRecord,
    NO_MATCH_CODE,
};
use serde::{Deserialize, Serialize};

/// 進捗ログの間隔（行数）
const PROGRESS_LOG_INTERVAL: usize = 10;

/// 照合パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// 採用に必要な最低スコア（0-100）
    pub threshold: f64,
    /// 金額の許容誤差（%）
    pub amount_tolerance_percent: f64,
    /// 金額完全一致時の加点
    pub exact_match_bonus: f64,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            threshold: 70.0,
            amount_tolerance_percent: 5.0,
            exact_match_bonus: 20.0,
        }
    }
}

/// 1回の照合実行の出力（結果表 + 監査ログ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchRun {
    pub results: Vec<ResultRow>,
    pub audit: Vec<AuditRecord>,
}

impl MatchRun {
    /// 監査ログ（結果表と同じ並び）
    pub fn audit_log(&self) -> &[AuditRecord] {
        &self.audit
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    fn with_capacity(n: usize) -> Self {
        Self {
            results: Vec::with_capacity(n),
            audit: Vec::with_capacity(n),
        }
    }

    fn push(&mut self, (row, audit): (ResultRow, AuditRecord)) {
        self.results.push(row);
        self.audit.push(audit);
    }
}

/// ファジーマッチャー
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher {
    threshold: f64,
    scorer: Scorer,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::from_settings(&MatchSettings::default())
    }
}

impl Matcher {
    pub fn new(threshold: f64, amount_tolerance_percent: f64, exact_match_bonus: f64) -> Self {
        Self {
            threshold,
            scorer: Scorer::new(amount_tolerance_percent, exact_match_bonus),
        }
    }

    pub fn from_settings(settings: &MatchSettings) -> Self {
        Self::new(
            settings.threshold,
            settings.amount_tolerance_percent,
            settings.exact_match_bonus,
        )
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// ソース1行に最も合う参照行を探す
    ///
    /// 最良スコアは 0 から始め、`>` のときだけ更新する。
    /// 同点なら先に現れた参照行が残り、0点の候補は採用されない。
    pub fn find_best_match(
        &self,
        source_desc: &str,
        source_amount: f64,
        references: &[ReferenceRecord],
    ) -> MatchResult {
        let mut best_score = 0.0;
        let mut best: Option<(&ReferenceRecord, MatchDetails)> = None;

        for reference in references {
            let (score, details) =
                self.scorer
                    .calculate_final_score(source_desc, source_amount, &reference.description);

            if score > best_score {
                best_score = score;
                best = Some((reference, details));
            }
        }

        match best {
            Some((reference, details)) if best_score >= self.threshold => MatchResult {
                matched: true,
                code: reference.code.clone(),
                matched_description: reference.description.clone(),
                score: best_score,
                details,
            },
            Some((_, details)) => unmatched(best_score, details),
            None => unmatched(0.0, MatchDetails::no_match()),
        }
    }

    /// ソース表全体を照合
    pub fn match_datasets(&self, sources: &[SourceRecord], references: &[ReferenceRecord]) -> MatchRun {
        self.match_datasets_with_progress(sources, references, |_| {})
    }

    /// ソース表全体を照合（1行処理するたびに `on_row` を呼ぶ）
    pub fn match_datasets_with_progress<F>(
        &self,
        sources: &[SourceRecord],
        references: &[ReferenceRecord],
        mut on_row: F,
    ) -> MatchRun
    where
        F: FnMut(usize),
    {
        tracing::info!(
            "Starting fuzzy matching for {} source entries against {} reference entries",
            sources.len(),
            references.len()
        );

        let mut run = MatchRun::with_capacity(sources.len());

        for (idx, source) in sources.iter().enumerate() {
            run.push(self.match_row(source, references));
            on_row(idx + 1);

            if (idx + 1) % PROGRESS_LOG_INTERVAL == 0 {
                tracing::info!("Processed {}/{} entries", idx + 1, sources.len());
            }
        }

        tracing::info!("Matching complete. {} entries processed.", run.len());
        run
    }

    /// ソース行単位で並列に照合する
    ///
    /// 出力の並びと内容は `match_datasets` と同じ。
    #[cfg(feature = "parallel")]
    pub fn match_datasets_parallel<F>(
        &self,
        sources: &[SourceRecord],
        references: &[ReferenceRecord],
        on_row: F,
    ) -> MatchRun
    where
        F: Fn(usize) + Sync,
    {
        use rayon::prelude::*;
        use std::sync::atomic::{AtomicUsize, Ordering};

        tracing::info!(
            "Starting parallel fuzzy matching for {} source entries against {} reference entries",
            sources.len(),
            references.len()
        );

        let done = AtomicUsize::new(0);

        // インデックス順の collect で元の並びを保つ
        let rows: Vec<(ResultRow, AuditRecord)> = sources
            .par_iter()
            .map(|source| {
                let row = self.match_row(source, references);
                on_row(done.fetch_add(1, Ordering::Relaxed) + 1);
                row
            })
            .collect();

        let mut run = MatchRun::with_capacity(rows.len());
        for row in rows {
            run.push(row);
        }

        tracing::info!("Matching complete. {} entries processed.", run.len());
        run
    }

    fn match_row(&self, source: &SourceRecord, references: &[ReferenceRecord]) -> (ResultRow, AuditRecord) {
        let result = self.find_best_match(&source.description, source.amount, references);
        tracing::debug!(
            source = %source.description,
            code = %result.code,
            score = result.score,
            "row matched"
        );
        project(source, result)
    }
}

fn unmatched(score: f64, details: MatchDetails) -> MatchResult {
    MatchResult {
        matched: false,
        code: NO_MATCH_CODE.to_string(),
        matched_description: String::new(),
        score,
        details,
    }
}

/// 照合結果を結果表・監査ログの行に変換（スコアは小数第2位で丸める）
fn project(source: &SourceRecord, result: MatchResult) -> (ResultRow, AuditRecord) {
    let row = ResultRow {
        description: source.description.clone(),
        amount: source.amount,
        matched_code: result.code.clone(),
        match_score: round2(result.score),
        match_type: result.details.match_type,
    };

    let audit = AuditRecord {
        source_description: source.description.clone(),
        source_amount: source.amount,
        matched_description: result.matched_description,
        matched_code: result.code,
        text_match_score: round2(result.details.text_score),
        numeric_match: result.details.numeric_consistent,
        final_score: round2(result.details.final_score),
        match_type: result.details.match_type,
        explanation: result.details.explanation,
    };

    (row, audit)
}
