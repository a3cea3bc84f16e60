//! 解析サーバーとの入出力
//!
//! エンドポイントの組み立てとレスポンスJSONの解釈。HTTP自体はCLI(reqwest)と
//! Web(fetch)がそれぞれ持つ。

use serde::Deserialize;
use crate::error::{Error, Result};
use crate::types::{AnalysisResult, BreachRecord, ChartImages, DashboardCharts, ScenarioSummaryRow};

pub const DEFAULT_BASE_URL: &str = "https://process-mining-ui.onrender.com";

/// errorフィールドが無い失敗レスポンスの文言
pub const SERVER_ERROR_FALLBACK: &str = "Server error";

/// multipartのフィールド名
pub const UPLOAD_FIELD: &str = "file";

/// 解析エンドポイント
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endpoint {
    #[default]
    Analyze,
    /// ダッシュボード画像付き
    AnalyzeWithDashboard,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Analyze => "/analyze",
            Endpoint::AnalyzeWithDashboard => "/analyze_with_dashboard",
        }
    }

    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// 接続先設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub base_url: String,
    pub endpoint: Endpoint,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: Endpoint::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn url(&self) -> String {
        self.endpoint.url(&self.base_url)
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ResponseEnvelope {
    results: Option<Vec<BreachRecord>>,
    scenario_summary: Option<Vec<ScenarioSummaryRow>>,
    chart: Option<String>,
    dashboard: Option<DashboardCharts>,
    error: Option<serde_json::Value>,
}

fn error_message(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// HTTPステータスと本文から解析結果を組み立てる
///
/// - 非2xx: 本文の `error`、無ければ "Server error"
/// - 2xxでも `error` 付き・JSON不正・`results` 欠落はサーバーエラー扱い
pub fn parse_response(status: u16, body: &str) -> Result<AnalysisResult> {
    let envelope = serde_json::from_str::<ResponseEnvelope>(body);

    if !(200..300).contains(&status) {
        let message = envelope
            .ok()
            .and_then(|e| e.error)
            .and_then(error_message)
            .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
        tracing::warn!(status, %message, "analysis request failed");
        return Err(Error::server(message));
    }

    let envelope = envelope
        .map_err(|e| Error::server(format!("Malformed response: {}", e)))?;

    if let Some(message) = envelope.error.and_then(error_message) {
        return Err(Error::server(message));
    }

    let results = envelope
        .results
        .ok_or_else(|| Error::server("Malformed response: missing results"))?;

    Ok(AnalysisResult {
        results,
        scenario_summary: envelope.scenario_summary,
        charts: ChartImages {
            chart: envelope.chart.filter(|c| !c.is_empty()),
            dashboard: envelope.dashboard,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        assert_eq!(
            Endpoint::Analyze.url("https://example.com/"),
            "https://example.com/analyze"
        );
        assert_eq!(
            Endpoint::AnalyzeWithDashboard.url("https://example.com"),
            "https://example.com/analyze_with_dashboard"
        );
        assert_eq!(
            AnalyzerConfig::default().url(),
            "https://process-mining-ui.onrender.com/analyze"
        );
    }

    #[test]
    fn test_parse_success() {
        let body = r#"{
            "results": [{"Order_ID": 1}, {"Order_ID": 2}],
            "scenario_summary": [{"Derived_Scenario": "Export", "Num_Orders": 2}],
            "chart": "data:image/png;base64,AAAA"
        }"#;
        let result = parse_response(200, body).expect("パース失敗");
        assert_eq!(result.len(), 2);
        assert_eq!(result.scenario_summary.as_ref().map(Vec::len), Some(1));
        assert_eq!(result.charts.chart.as_deref(), Some("data:image/png;base64,AAAA"));
        assert!(result.charts.dashboard.is_none());
    }

    #[test]
    fn test_parse_dashboard() {
        let body = r#"{
            "results": [],
            "dashboard": {"breach_counts": "https://example.com/c.png", "time_dev_dist": "https://example.com/t.png"}
        }"#;
        let result = parse_response(200, body).expect("パース失敗");
        let dashboard = result.charts.dashboard.expect("dashboardがない");
        assert_eq!(dashboard.entries().len(), 2);
        assert!(result.scenario_summary.is_none());
    }

    #[test]
    fn test_parse_error_status_uses_error_field() {
        let err = parse_response(500, r#"{"error":"bad format"}"#).unwrap_err();
        match err {
            Error::ServerError { message } => assert_eq!(message, "bad format"),
            other => panic!("想定外のエラー: {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_status_fallback() {
        for body in ["<html>502 Bad Gateway</html>", "{}", r#"{"error": ""}"#] {
            let err = parse_response(502, body).unwrap_err();
            assert_eq!(err.to_string(), SERVER_ERROR_FALLBACK);
        }
    }

    #[test]
    fn test_parse_success_with_error_field() {
        let err = parse_response(200, r#"{"error":"No file uploaded"}"#).unwrap_err();
        assert_eq!(err.to_string(), "No file uploaded");
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_response(200, "not json").unwrap_err();
        assert!(err.to_string().starts_with("Malformed response"));

        let err = parse_response(200, r#"{"chart": null}"#).unwrap_err();
        assert!(err.to_string().contains("missing results"));
    }
}
