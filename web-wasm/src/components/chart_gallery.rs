//! グラフ画像（単体グラフ + ダッシュボード）

use leptos::prelude::*;
use breach_report_common::ChartImages;

#[component]
pub fn ChartGallery(charts: RwSignal<Option<ChartImages>>) -> impl IntoView {
    view! {
        <div class="chart-gallery">
            {move || charts.with(|current| match current {
                None => view! {
                    <p class="text-muted">"Charts appear here after an analysis"</p>
                }
                .into_any(),
                Some(images) => {
                    let main = images.chart.clone().map(|src| view! {
                        <figure class="chart">
                            <img id="breachChart" src=src alt="Breach Type Frequency" />
                        </figure>
                    });
                    let dashboard = images.dashboard.as_ref().map(|dashboard| {
                        dashboard
                            .entries()
                            .into_iter()
                            .map(|(key, title, url)| view! {
                                <figure class="chart" id=key>
                                    <img src=url.to_string() alt=title />
                                    <figcaption>{title}</figcaption>
                                </figure>
                            })
                            .collect_view()
                    });
                    view! { <div class="chart-grid">{main}{dashboard}</div> }.into_any()
                }
            })}
        </div>
    }
}
