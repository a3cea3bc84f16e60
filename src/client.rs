//! 解析サーバーへのCSVアップロード（reqwest multipart）

use crate::error::{BreachReportError, Result};
use breach_report_common::response::UPLOAD_FIELD;
use breach_report_common::{parse_response, AnalysisClient, AnalysisResult, AnalyzerConfig, Error};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;

/// アップロードするCSV
#[derive(Debug, Clone)]
pub struct CsvUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CsvUpload {
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BreachReportError::FileNotFound(path.display().to_string()));
        }
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.csv".to_string());
        Ok(Self { file_name, bytes })
    }
}

pub struct HttpClient {
    client: Client,
    url: String,
}

impl HttpClient {
    pub fn new(config: &AnalyzerConfig) -> Self {
        // タイムアウト・リトライは設けない（応答まで待つ）
        Self {
            client: Client::new(),
            url: config.url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, file: CsvUpload) -> reqwest::Result<(u16, String)> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str("text/csv")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self.client.post(&self.url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}

impl AnalysisClient for HttpClient {
    type File = CsvUpload;

    async fn analyze(&self, file: CsvUpload) -> breach_report_common::Result<AnalysisResult> {
        tracing::debug!(url = %self.url, file = %file.file_name, bytes = file.bytes.len(), "uploading");
        let (status, body) = self.post(file).await.map_err(|e| {
            tracing::error!(error = %e, "request failed");
            Error::server(e.to_string())
        })?;
        tracing::debug!(status, body_len = body.len(), "response received");
        parse_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_file() {
        let result = CsvUpload::read(Path::new("/nonexistent/log.csv"));
        assert!(matches!(result, Err(BreachReportError::FileNotFound(_))));
    }

    #[test]
    fn test_read_keeps_file_name() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("event_log.csv");
        std::fs::write(&path, "Case_ID,Activity\n1,Cut\n").unwrap();

        let upload = CsvUpload::read(&path).expect("読込失敗");
        assert_eq!(upload.file_name, "event_log.csv");
        assert_eq!(upload.bytes, b"Case_ID,Activity\n1,Cut\n");
    }

    #[test]
    fn test_client_url_from_config() {
        let config = AnalyzerConfig {
            base_url: "http://localhost:5000".to_string(),
            ..Default::default()
        };
        let client = HttpClient::new(&config);
        assert_eq!(client.url(), "http://localhost:5000/analyze");
    }
}
