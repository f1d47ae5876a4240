use crate::error::{MatchError, Result};
use fuzzy_match_common::MatchSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 入出力ファイルのパス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub source_file: PathBuf,
    pub reference_file: PathBuf,
    pub output_file: PathBuf,
    pub audit_log_file: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        let input = PathBuf::from("data").join("input");
        let output = PathBuf::from("data").join("output");
        Self {
            source_file: input.join("source_descriptions_amounts.xlsx"),
            reference_file: input.join("reference_descriptions_codes.xlsx"),
            output_file: output.join("matched_results.xlsx"),
            audit_log_file: output.join("audit_log.xlsx"),
        }
    }
}

/// 入力ファイルの列名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub source_description: String,
    pub source_amount: String,
    pub reference_description: String,
    pub reference_code: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            source_description: "Description".into(),
            source_amount: "Amount".into(),
            reference_description: "Description".into(),
            reference_code: "Code".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathConfig,
    pub columns: ColumnConfig,
    pub matching: MatchSettings,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathConfig::default(),
            columns: ColumnConfig::default(),
            matching: MatchSettings::default(),
            log_level: "info".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("fuzzy-match").join("config.json"))
    }

    /// 照合パラメータと列名を検証
    pub fn validate(&self) -> Result<()> {
        let m = &self.matching;

        if !m.threshold.is_finite() || !(0.0..=100.0).contains(&m.threshold) {
            return Err(MatchError::InvalidParameter(format!(
                "threshold は 0〜100 で指定してください: {}",
                m.threshold
            )));
        }
        if !m.amount_tolerance_percent.is_finite() || m.amount_tolerance_percent < 0.0 {
            return Err(MatchError::InvalidParameter(format!(
                "amount_tolerance_percent は 0 以上で指定してください: {}",
                m.amount_tolerance_percent
            )));
        }
        if !m.exact_match_bonus.is_finite() {
            return Err(MatchError::InvalidParameter(format!(
                "exact_match_bonus が不正です: {}",
                m.exact_match_bonus
            )));
        }

        let c = &self.columns;
        for (name, value) in [
            ("source_description", &c.source_description),
            ("source_amount", &c.source_amount),
            ("reference_description", &c.reference_description),
            ("reference_code", &c.reference_code),
        ] {
            if value.trim().is_empty() {
                return Err(MatchError::Config(format!("列名 {} が空です", name)));
            }
        }

        Ok(())
    }
}
