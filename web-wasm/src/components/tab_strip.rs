//! タブ切り替え

use leptos::prelude::*;
use breach_report_common::TabStrip;

#[component]
pub fn TabStripView(tabs: RwSignal<TabStrip>) -> impl IntoView {
    let entries = tabs.with_untracked(|t| t.tabs().to_vec());

    view! {
        <nav class="tab-strip">
            {entries
                .into_iter()
                .map(|tab| {
                    let tab_id = tab.id.clone();
                    let click_id = tab.id.clone();
                    view! {
                        <button
                            id=tab.id.clone()
                            class="tab"
                            class:active=move || tabs.with(|t| t.is_tab_active(&tab_id))
                            on:click=move |_| {
                                tabs.update(|t| {
                                    if let Err(e) = t.select(&click_id) {
                                        gloo::console::warn!(e.to_string());
                                    }
                                });
                            }
                        >
                            {tab.label.clone()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn TabPanel(
    tabs: RwSignal<TabStrip>,
    panel_id: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=panel_id
            class="tab-content"
            class:active=move || tabs.with(|t| t.is_panel_active(panel_id))
        >
            {children()}
        </div>
    }
}
