use crate::error::{BreachReportError, Result};
use breach_report_common::{AnalyzerConfig, CsvQuoting, Endpoint};
use breach_report_common::response::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 接続先を上書きする環境変数
pub const BASE_URL_ENV: &str = "BREACH_REPORT_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub use_dashboard: bool,
    pub escape_csv: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            use_dashboard: false,
            escape_csv: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BreachReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("breach-report").join("config.json"))
    }

    /// 接続先URL（環境変数を優先）
    pub fn base_url(&self) -> String {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.base_url.clone(),
        }
    }

    pub fn analyzer(&self, dashboard: bool, url_override: Option<&str>) -> AnalyzerConfig {
        let endpoint = if dashboard || self.use_dashboard {
            Endpoint::AnalyzeWithDashboard
        } else {
            Endpoint::Analyze
        };
        AnalyzerConfig {
            base_url: url_override.map(str::to_string).unwrap_or_else(|| self.base_url()),
            endpoint,
        }
    }

    pub fn quoting(&self, escape: bool) -> CsvQuoting {
        if escape || self.escape_csv {
            CsvQuoting::Escaped
        } else {
            CsvQuoting::Verbatim
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).expect("読込失敗");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            base_url: "http://localhost:10000".to_string(),
            use_dashboard: true,
            escape_csv: true,
        };
        config.save_to(&path).expect("保存失敗");

        let loaded = Config::load_from(&path).expect("読込失敗");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"use_dashboard": true}"#).unwrap();

        let config = Config::load_from(&path).expect("読込失敗");
        assert!(config.use_dashboard);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_analyzer_endpoint_selection() {
        let config = Config::default();
        let plain = config.analyzer(false, Some("http://localhost:1"));
        assert_eq!(plain.url(), "http://localhost:1/analyze");

        let dashboard = config.analyzer(true, Some("http://localhost:1"));
        assert_eq!(dashboard.url(), "http://localhost:1/analyze_with_dashboard");
    }

    #[test]
    fn test_quoting_selection() {
        let config = Config::default();
        assert_eq!(config.quoting(false), CsvQuoting::Verbatim);
        assert_eq!(config.quoting(true), CsvQuoting::Escaped);
    }
}
