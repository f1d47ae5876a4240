//! 照合パイプライン
//!
//! ## 処理フロー
//! 1. ソースデータ読み込み（説明文 + 金額）
//! 2. 参照データ読み込み（説明文 + コード）
//! 3. ファジーマッチング
//! 4. 結果表の保存
//! 5. 監査ログの保存

use crate::config::Config;
use crate::error::Result;
use crate::{export, loader};
use fuzzy_match_common::{generate_summary_report, MatchRun, Matcher};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// 実行オプション
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// ソース行を並列に照合する
    pub parallel: bool,
    /// 進捗バーを表示する
    pub show_progress: bool,
}

/// パイプラインの出力
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub run: MatchRun,
    pub summary: String,
}

/// 設定に従ってパイプラインを一括実行
pub fn run_pipeline(config: &Config, options: RunOptions) -> Result<PipelineOutput> {
    config.validate()?;
    let paths = &config.paths;
    let columns = &config.columns;

    tracing::info!("[Step 1/5] Loading source data...");
    let sources = loader::load_source_data(
        &paths.source_file,
        &columns.source_description,
        &columns.source_amount,
    )?;

    tracing::info!("[Step 2/5] Loading reference data...");
    let references = loader::load_reference_data(
        &paths.reference_file,
        &columns.reference_description,
        &columns.reference_code,
    )?;

    tracing::info!("[Step 3/5] Performing fuzzy matching...");
    let matcher = Matcher::from_settings(&config.matching);
    let progress = create_progress_bar(sources.len() as u64, options.show_progress);
    let run = if options.parallel {
        matcher.match_datasets_parallel(&sources, &references, |_| progress.inc(1))
    } else {
        matcher.match_datasets_with_progress(&sources, &references, |_| progress.inc(1))
    };
    progress.finish_and_clear();

    tracing::info!("[Step 4/5] Saving results...");
    export::excel::save_results(&run.results, &paths.output_file)?;

    tracing::info!("[Step 5/5] Generating audit log...");
    export::excel::save_audit_log(run.audit_log(), &paths.audit_log_file)?;

    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let summary = generate_summary_report(&run.results, run.audit_log(), &generated_at);
    tracing::info!("Pipeline completed successfully");

    Ok(PipelineOutput { run, summary })
}

fn create_progress_bar(len: u64, visible: bool) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if visible {
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        pb.set_message("照合中");
    } else {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }
    pb
}
