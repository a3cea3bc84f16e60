//! 解析サーバー連携（fetch + multipart）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use breach_report_common::{
    parse_response, AnalysisClient, AnalysisResult, AnalyzerConfig, Error,
    response::UPLOAD_FIELD,
};

/// ブラウザの fetch で送信するクライアント
#[derive(Debug, Clone)]
pub struct FetchClient {
    url: String,
}

impl FetchClient {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self { url: config.url() }
    }
}

impl AnalysisClient for FetchClient {
    type File = File;

    async fn analyze(&self, file: File) -> breach_report_common::Result<AnalysisResult> {
        let (status, body) = post_file(&self.url, &file).await.map_err(|e| {
            let message = js_error_message(&e);
            gloo::console::error!(format!("analyze request failed: {}", message));
            Error::server(message)
        })?;
        parse_response(status, &body)
    }
}

/// multipart で1ファイル送信し (ステータス, 本文) を返す
async fn post_file(url: &str, file: &File) -> Result<(u16, String), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form.into());

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

/// JsValue から表示用メッセージを取り出す
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
