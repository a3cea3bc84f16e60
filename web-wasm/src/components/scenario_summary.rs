//! シナリオ別サマリー

use leptos::prelude::*;
use breach_report_common::{TableBody, SUMMARY_COLUMNS};
use crate::components::breach_tables::render_rows;

#[component]
pub fn ScenarioSummary(summary: RwSignal<TableBody>) -> impl IntoView {
    view! {
        <section class="table-section">
            <h3>"Scenario Summary"</h3>
            <table id="scenarioSummaryTable">
                <thead>
                    <tr>
                        {SUMMARY_COLUMNS
                            .iter()
                            .map(|label| view! { <th>{*label}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || summary.with(|body| render_rows(body))}
                </tbody>
            </table>
        </section>
    }
}
