//! サマリーレポート生成
//!
//! 結果表と監査ログの公開列だけから集計する。
//! 区分の内訳は件数順ではなく、常に High → Medium → Low → Poor → No Match の順で出す。

use crate::types::{AuditRecord, MatchType, ResultRow};

const RULE: &str = "======================================================================";
const SUB_RULE: &str = "----------------------------------------------------------------------";

/// 集計値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportStats {
    pub total_records: usize,
    pub matched_records: usize,
    pub no_match_records: usize,
    /// 区分ごとの件数（表示順、0件の区分は含まない）
    pub match_type_counts: Vec<(MatchType, usize)>,
    /// 照合できた行の平均スコア
    pub average_score: f64,
    pub numeric_match_count: usize,
}

impl ReportStats {
    pub fn from_tables(results: &[ResultRow], audit: &[AuditRecord]) -> Self {
        let total_records = results.len();
        let matched: Vec<&ResultRow> = results.iter().filter(|r| r.is_matched()).collect();

        let average_score = if matched.is_empty() {
            0.0
        } else {
            matched.iter().map(|r| r.match_score).sum::<f64>() / matched.len() as f64
        };

        let match_type_counts = MatchType::ALL
            .iter()
            .map(|t| (*t, results.iter().filter(|r| r.match_type == *t).count()))
            .filter(|(_, count)| *count > 0)
            .collect();

        Self {
            total_records,
            matched_records: matched.len(),
            no_match_records: total_records - matched.len(),
            match_type_counts,
            average_score,
            numeric_match_count: audit.iter().filter(|a| a.numeric_match).count(),
        }
    }

    /// 全体に対する割合（%）。0件なら 0.0
    pub fn percent(&self, count: usize) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            count as f64 / self.total_records as f64 * 100.0
        }
    }
}

/// テキスト形式のサマリーレポートを生成
///
/// # Arguments
/// * `results` - 結果表
/// * `audit` - 監査ログ
/// * `generated_at` - レポートに記載する生成日時
pub fn generate_summary_report(results: &[ResultRow], audit: &[AuditRecord], generated_at: &str) -> String {
    let stats = ReportStats::from_tables(results, audit);
    let mut report = String::new();

    report.push('\n');
    report.push_str(RULE);
    report.push_str("\n         EXCEL FUZZY MATCHING PIPELINE - SUMMARY REPORT          \n");
    report.push_str(RULE);
    report.push_str(&format!("\n\nGenerated: {}\n\n", generated_at));

    report.push_str("MATCHING STATISTICS\n");
    report.push_str(SUB_RULE);
    report.push('\n');
    report.push_str(&format!(
        "Total Records Processed:       {:>6}\n",
        stats.total_records
    ));
    report.push_str(&format!(
        "Successfully Matched:          {:>6} ({:.1}%)\n",
        stats.matched_records,
        stats.percent(stats.matched_records)
    ));
    report.push_str(&format!(
        "No Match Found:                {:>6} ({:.1}%)\n\n",
        stats.no_match_records,
        stats.percent(stats.no_match_records)
    ));

    report.push_str("MATCH QUALITY BREAKDOWN\n");
    report.push_str(SUB_RULE);
    report.push('\n');
    for (match_type, count) in &stats.match_type_counts {
        report.push_str(&format!(
            "{:.<30} {:>6} ({:.1}%)\n",
            match_type.label(),
            count,
            stats.percent(*count)
        ));
    }

    report.push_str("\nSCORING METRICS\n");
    report.push_str(SUB_RULE);
    report.push('\n');
    report.push_str(&format!(
        "Average Match Score:           {:>6.2}\n",
        stats.average_score
    ));
    report.push_str(&format!(
        "Numeric Consistency Matches:   {:>6} ({:.1}%)\n\n",
        stats.numeric_match_count,
        stats.percent(stats.numeric_match_count)
    ));

    report.push_str("OUTPUT FILES\n");
    report.push_str(SUB_RULE);
    report.push('\n');
    report.push_str("[OK] Matched results saved\n");
    report.push_str("[OK] Audit log with detailed explanations saved\n\n");
    report.push_str(RULE);
    report.push('\n');

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NO_MATCH_CODE;

    fn row(code: &str, score: f64, match_type: MatchType) -> ResultRow {
        ResultRow {
            description: "desc".to_string(),
            amount: 1.0,
            matched_code: code.to_string(),
            match_score: score,
            match_type,
        }
    }

    fn audit(numeric_match: bool) -> AuditRecord {
        AuditRecord {
            source_description: "desc".to_string(),
            source_amount: 1.0,
            matched_description: String::new(),
            matched_code: String::new(),
            text_match_score: 0.0,
            numeric_match,
            final_score: 0.0,
            match_type: MatchType::PoorMatch,
            explanation: String::new(),
        }
    }

    #[test]
    fn test_stats_from_tables() {
        let results = vec![
            row("SUPP-001", 90.0, MatchType::HighConfidence),
            row("SOFT-002", 80.0, MatchType::MediumConfidence),
            row(NO_MATCH_CODE, 20.0, MatchType::PoorMatch),
            row(NO_MATCH_CODE, 0.0, MatchType::NoMatch),
        ];
        let audits = vec![audit(true), audit(true), audit(false), audit(false)];

        let stats = ReportStats::from_tables(&results, &audits);
        assert_eq!(stats.total_records, 4);
        assert_eq!(stats.matched_records, 2);
        assert_eq!(stats.no_match_records, 2);
        assert_eq!(stats.average_score, 85.0);
        assert_eq!(stats.numeric_match_count, 2);
        assert_eq!(stats.percent(1), 25.0);
        assert_eq!(
            stats.match_type_counts,
            vec![
                (MatchType::HighConfidence, 1),
                (MatchType::MediumConfidence, 1),
                (MatchType::PoorMatch, 1),
                (MatchType::NoMatch, 1),
            ]
        );
    }

    #[test]
    fn test_report_sections() {
        let results = vec![row("SUPP-001", 87.69, MatchType::MediumConfidence)];
        let report = generate_summary_report(&results, &[audit(true)], "2026-01-01 00:00:00");

        assert!(report.contains("SUMMARY REPORT"));
        assert!(report.contains("Generated: 2026-01-01 00:00:00"));
        assert!(report.contains("Total Records Processed"));
        assert!(report.contains("Successfully Matched:               1 (100.0%)"));
        assert!(report.contains("Medium Confidence"));
        assert!(report.contains("Average Match Score:            87.69"));
    }

    #[test]
    fn test_report_no_matches() {
        let results = vec![row(NO_MATCH_CODE, 10.0, MatchType::PoorMatch)];
        let report = generate_summary_report(&results, &[audit(false)], "now");

        assert!(report.contains("No Match Found:                     1 (100.0%)"));
        assert!(report.contains("Average Match Score:             0.00"));
    }

    #[test]
    fn test_report_empty_tables() {
        let report = generate_summary_report(&[], &[], "now");
        assert!(report.contains("Total Records Processed:            0"));
        assert!(report.contains("(0.0%)"));
    }

    #[test]
    fn test_breakdown_keeps_tier_order() {
        let results = vec![
            row("A", 95.0, MatchType::HighConfidence),
            row(NO_MATCH_CODE, 0.0, MatchType::NoMatch),
            row(NO_MATCH_CODE, 0.0, MatchType::NoMatch),
            row(NO_MATCH_CODE, 0.0, MatchType::NoMatch),
        ];
        let report = generate_summary_report(&results, &[], "now");

        let high = report.find("High Confidence").unwrap();
        let none = report.find("No Match....").unwrap();
        assert!(high < none);
        assert!(!report.contains("Medium Confidence"));
    }
}
