use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fuzzy-match")]
#[command(about = "説明文と金額で参照コードを割り当てるファジーマッチングツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ログファイル（標準エラーと同じ内容を追記）
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ソース表と参照表を照合し、結果と監査ログをExcelに出力
    Run {
        /// ソースExcel（説明文 + 金額）
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// 参照Excel（説明文 + コード）
        #[arg(short, long)]
        reference: Option<PathBuf>,

        /// 結果Excelの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 監査ログExcelの出力先
        #[arg(short, long)]
        audit: Option<PathBuf>,

        /// 採用に必要な最低スコア（0-100）
        #[arg(short, long)]
        threshold: Option<f64>,

        /// 金額の許容誤差（%）
        #[arg(long)]
        tolerance: Option<f64>,

        /// 金額完全一致時の加点
        #[arg(long)]
        bonus: Option<f64>,

        /// ソース行を並列に照合
        #[arg(long)]
        parallel: bool,

        /// 並列実行時のスレッド数（省略時はCPU数）
        #[arg(short, long, requires = "parallel")]
        jobs: Option<usize>,

        /// 進捗バーを表示しない
        #[arg(long)]
        no_progress: bool,
    },

    /// 1組の説明文を採点して内訳をJSONで表示
    Score {
        /// ソース説明文
        source_description: String,

        /// ソース金額
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// 参照説明文
        reference_description: String,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// デフォルト設定を書き出す
        #[arg(long)]
        init: bool,
    },
}

/// `run` のコマンドライン上書き
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub source: Option<PathBuf>,
    pub reference: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub audit: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub tolerance: Option<f64>,
    pub bonus: Option<f64>,
}

impl RunOverrides {
    /// 指定された項目だけ設定を上書き
    pub fn apply(self, config: &mut crate::config::Config) {
        if let Some(p) = self.source {
            config.paths.source_file = p;
        }
        if let Some(p) = self.reference {
            config.paths.reference_file = p;
        }
        if let Some(p) = self.output {
            config.paths.output_file = p;
        }
        if let Some(p) = self.audit {
            config.paths.audit_log_file = p;
        }
        if let Some(v) = self.threshold {
            config.matching.threshold = v;
        }
        if let Some(v) = self.tolerance {
            config.matching.amount_tolerance_percent = v;
        }
        if let Some(v) = self.bonus {
            config.matching.exact_match_bonus = v;
        }
    }
}
