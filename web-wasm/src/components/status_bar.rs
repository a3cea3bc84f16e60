//! ステータス表示・スピナー

use leptos::prelude::*;
use breach_report_common::Status;

#[component]
pub fn StatusBar(status: RwSignal<Status>, busy: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="status-area">
            <Show when=move || busy.get()>
                <div id="spinner" class="spinner" />
            </Show>
            <p
                id="statusMessage"
                class=move || status.with(|s| s.kind.as_str())
            >
                {move || status.with(|s| s.text.clone())}
            </p>
        </div>
    }
}
