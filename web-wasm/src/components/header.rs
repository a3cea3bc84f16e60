//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Process Breach Analyzer"</h1>
            <p class="text-muted">"Upload an order event CSV to detect process breaches"</p>
        </header>
    }
}
