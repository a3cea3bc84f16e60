//! 解析・ダウンロードボタン

use leptos::prelude::*;
use breach_report_common::pipeline::analyze_button_label;

#[component]
pub fn ActionButtons<FA, FD>(
    busy: RwSignal<bool>,
    on_analyze: FA,
    on_download: FD,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
    FD: Fn(()) + 'static + Clone,
{
    view! {
        <div class="action-buttons">
            <button
                id="analyzeBtn"
                class="btn btn-primary"
                disabled=move || busy.get()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || analyze_button_label(busy.get())}
            </button>

            <button
                id="downloadBtn"
                class="btn btn-secondary"
                on:click={
                    let on_download = on_download.clone();
                    move |_| on_download(())
                }
            >
                "Download CSV"
            </button>
        </div>
    }
}
