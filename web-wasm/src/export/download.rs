//! CSVダウンロード（Blob + 一時アンカー）

use gloo::file::{Blob, ObjectUrl};
use wasm_bindgen::prelude::*;
use web_sys::HtmlAnchorElement;
use breach_report_common::CsvExport;

/// 成果物をブラウザのダウンロードとして保存させる
pub fn download_csv(export: &CsvExport) -> Result<(), JsValue> {
    let blob = Blob::new_with_options(export.content.as_str(), Some(export.mime_type));
    let url = ObjectUrl::from(blob);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body unavailable"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(export.file_name);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use breach_report_common::{export_csv, BreachRecord, CsvQuoting};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_download_csv_appends_and_removes_anchor() {
        let records = vec![BreachRecord {
            order_id: Some("1001".to_string()),
            ..Default::default()
        }];
        let export = export_csv(&records, CsvQuoting::Verbatim).expect("CSV export failed");

        download_csv(&export).expect("download failed");

        let document = web_sys::window().unwrap().document().unwrap();
        let anchors = document.get_elements_by_tag_name("a");
        assert_eq!(anchors.length(), 0);
    }
}
