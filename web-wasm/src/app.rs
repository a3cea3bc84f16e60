//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;
use breach_report_common::{AnalysisClient, AnalyzerConfig, ResultPipeline};
use breach_report_common::tabs::{default_tabs, DASHBOARD_PANEL, DETAILS_PANEL, SUMMARY_PANEL};
use crate::api::analyze::{js_error_message, FetchClient};
use crate::components::{
    action_buttons::ActionButtons,
    breach_tables::BreachTables,
    chart_gallery::ChartGallery,
    header::Header,
    scenario_summary::ScenarioSummary,
    status_bar::StatusBar,
    tab_strip::{TabPanel, TabStripView},
    upload_area::UploadArea,
};
use crate::export::download::download_csv;
use crate::view_state::SignalView;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = AnalyzerConfig::default();

    // アプリケーション状態
    let view_state = SignalView::new();
    let pipeline = StoredValue::new(ResultPipeline::new(view_state));
    let tabs = RwSignal::new(default_tabs());
    let selected_file = StoredValue::new_local(None::<File>);
    let (file_name, set_file_name) = signal(None::<String>);

    // ファイル選択ハンドラ
    let on_file_selected = move |file: File| {
        set_file_name.set(Some(file.name()));
        selected_file.set_value(Some(file));
    };

    // 解析開始ハンドラ
    let on_analyze = move |_| {
        let file = selected_file.get_value();
        let mut upload = None;
        pipeline.update_value(|p| upload = p.begin(file).ok());

        // 未選択はパイプライン側で通知済み
        let Some(file) = upload else {
            return;
        };

        let client = FetchClient::new(&config);
        spawn_local(async move {
            let outcome = client.analyze(file).await;
            pipeline.update_value(|p| {
                // 失敗はステータス欄とアラートに表示済み
                let _ = p.finish(outcome);
            });
        });
    };

    // CSV出力ハンドラ
    let on_download = move |_| {
        let mut export = None;
        pipeline.update_value(|p| export = p.export_csv().ok());

        if let Some(export) = export {
            if let Err(e) = download_csv(&export) {
                let message = js_error_message(&e);
                gloo::console::error!(format!("download failed: {}", message));
                gloo::dialogs::alert(&format!("Error: {}", message));
            }
        }
    };

    view! {
        <div class="container">
            <Header />

            <UploadArea file_name=file_name on_file_selected=on_file_selected />

            <ActionButtons
                busy=view_state.busy
                on_analyze=on_analyze
                on_download=on_download
            />

            <StatusBar status=view_state.status busy=view_state.busy />

            <TabStripView tabs=tabs />

            <TabPanel tabs=tabs panel_id=DETAILS_PANEL>
                <BreachTables tables=view_state.detail_tables />
            </TabPanel>

            <TabPanel tabs=tabs panel_id=SUMMARY_PANEL>
                <ScenarioSummary summary=view_state.summary />
            </TabPanel>

            <TabPanel tabs=tabs panel_id=DASHBOARD_PANEL>
                <ChartGallery charts=view_state.charts />
            </TabPanel>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tabs_switch_to_dashboard() {
        let mut tabs = default_tabs();
        tabs.select("dashboard-tab").expect("選択失敗");
        assert!(tabs.is_panel_active(DASHBOARD_PANEL));
        assert!(!tabs.is_panel_active(DETAILS_PANEL));
        assert!(!tabs.is_panel_active(SUMMARY_PANEL));
    }
}
