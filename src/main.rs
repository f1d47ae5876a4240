use anyhow::Context;
use clap::Parser;
use fuzzy_match_common::Scorer;
use fuzzy_match_rust::cli::{Cli, Commands, RunOverrides};
use fuzzy_match_rust::{logging, run_pipeline, Config, RunOptions};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("設定ファイルの読み込みに失敗")?;

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        logging::parse_level(&config.log_level)?
    };
    logging::init(level, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Run {
            source,
            reference,
            output,
            audit,
            threshold,
            tolerance,
            bonus,
            parallel,
            jobs,
            no_progress,
        } => {
            println!("🔎 fuzzy-match - 照合パイプライン\n");

            let mut config = config;
            RunOverrides { source, reference, output, audit, threshold, tolerance, bonus }
                .apply(&mut config);

            if let Some(n) = jobs {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build_global()
                    .context("スレッドプールの初期化に失敗")?;
            }

            let options = RunOptions {
                parallel,
                show_progress: !no_progress,
            };

            let output = run_pipeline(&config, options).with_context(|| {
                format!(
                    "パイプラインの実行に失敗 (source: {}, reference: {})",
                    config.paths.source_file.display(),
                    config.paths.reference_file.display()
                )
            })?;

            println!("✔ {}件を照合", output.run.len());
            println!("✔ 結果を保存: {}", config.paths.output_file.display());
            println!("✔ 監査ログを保存: {}", config.paths.audit_log_file.display());
            println!("{}", output.summary);
            tracing::info!("{}", output.summary);

            println!("✅ 完了");
        }

        Commands::Score { source_description, amount, reference_description } => {
            let scorer = Scorer::new(
                config.matching.amount_tolerance_percent,
                config.matching.exact_match_bonus,
            );
            let (_, details) = scorer.calculate_final_score(&source_description, amount, &reference_description);
            println!("{}", serde_json::to_string_pretty(&details)?);
        }

        Commands::Config { show, init } => {
            if init {
                let path = Config::config_path()?;
                Config::default().save_to(&path)?;
                println!("✔ デフォルト設定を書き出しました: {}", path.display());
            }

            if show || !init {
                println!("設定:");
                println!("  ソース: {}", config.paths.source_file.display());
                println!("  参照: {}", config.paths.reference_file.display());
                println!("  結果出力: {}", config.paths.output_file.display());
                println!("  監査ログ: {}", config.paths.audit_log_file.display());
                println!("  閾値: {}", config.matching.threshold);
                println!("  金額許容誤差: {}%", config.matching.amount_tolerance_percent);
                println!("  完全一致加点: {}", config.matching.exact_match_bonus);
                println!(
                    "  列名: {} / {}, {} / {}",
                    config.columns.source_description,
                    config.columns.source_amount,
                    config.columns.reference_description,
                    config.columns.reference_code
                );
                println!("  ログレベル: {}", config.log_level);
            }
        }
    }

    Ok(())
}
