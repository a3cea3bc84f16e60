//! エラー型定義
//!
//! Display文字列はそのままユーザー向けのアラート文言として使う。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// ファイル未選択（ネットワーク呼び出し前に止める）
    #[error("Please select a CSV file!")]
    NoFileSelected,

    /// サーバー側エラー（非2xx、不正なJSON、errorフィールド付きレスポンス、通信失敗）
    #[error("{message}")]
    ServerError { message: String },

    /// 保持している解析結果が空
    #[error("No breaches to download!")]
    NothingToExport,

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(String),
}

impl Error {
    pub fn server(message: impl Into<String>) -> Self {
        Error::ServerError { message: message.into() }
    }

    /// ステータス欄・アラートに出す文言
    pub fn user_message(&self) -> String {
        match self {
            Error::NoFileSelected | Error::NothingToExport => self.to_string(),
            _ => format!("Error: {}", self),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
