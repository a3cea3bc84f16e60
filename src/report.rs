//! 単体で開けるHTMLレポート
//!
//! Web画面と同じタブ・テーブル構成を静的に書き出す。タブ切り替えは埋め込みスクリプト。

use breach_report_common::tabs::{default_tabs, DASHBOARD_PANEL, DETAILS_PANEL, SUMMARY_PANEL};
use breach_report_common::view::{figure_html, header_html, NO_BREACHES_MESSAGE};
use breach_report_common::{
    render_detail_tables, render_scenario_summary, AnalysisResult, DetailTable, DetailTables,
    TableBody, SUMMARY_COLUMNS,
};

pub const REPORT_FILE_NAME: &str = "breach_report.html";
pub const REPORT_TITLE: &str = "Process Breach Report";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f7f7f9; color: #222; }
.container { max-width: 1200px; margin: 0 auto; padding: 24px; }
.generated { color: #777; font-size: 12px; }
.tab-strip { display: flex; gap: 4px; border-bottom: 1px solid #ccc; margin-top: 16px; }
.tab { padding: 8px 16px; border: none; background: none; cursor: pointer; }
.tab.active { border-bottom: 3px solid #3b7ddd; font-weight: bold; }
.tab-content { display: none; padding: 16px 0; }
.tab-content.active { display: block; }
table { border-collapse: collapse; width: 100%; margin-bottom: 24px; background: #fff; }
th, td { border: 1px solid #ddd; padding: 6px 8px; font-size: 13px; vertical-align: top; }
th { background: #f0f0f0; }
td.placeholder { text-align: center; color: #777; }
.chart-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(360px, 1fr)); gap: 16px; }
.chart img { max-width: 100%; }
"#;

const SCRIPT: &str = r#"
document.querySelectorAll('.tab').forEach(function (tab) {
  tab.addEventListener('click', function () {
    var target = document.getElementById(tab.dataset.panel);
    if (!target) { return; }
    document.querySelectorAll('.tab').forEach(function (t) { t.classList.remove('active'); });
    document.querySelectorAll('.tab-content').forEach(function (p) { p.classList.remove('active'); });
    tab.classList.add('active');
    target.classList.add('active');
  });
});
"#;

/// レポートHTMLを組み立てる
pub fn render_report(result: &AnalysisResult, generated_at: &str) -> String {
    let tabs = default_tabs();

    let tab_buttons: String = tabs
        .tabs()
        .iter()
        .map(|tab| {
            format!(
                "<button class=\"tab{}\" id=\"{}\" data-panel=\"{}\">{}</button>",
                active_class(tabs.is_tab_active(&tab.id)),
                tab.id,
                tab.panel_id,
                tab.label
            )
        })
        .collect();

    let panel = |panel_id: &str, body: String| {
        format!(
            "<section class=\"tab-content{}\" id=\"{}\">{}</section>",
            active_class(tabs.is_panel_active(panel_id)),
            panel_id,
            body
        )
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n<style>{style}</style>\n</head>\n<body>\n<div class=\"container\">\n<h1>{title}</h1>\n<p class=\"generated\">Generated {generated} / {count} breach record(s)</p>\n<nav class=\"tab-strip\">{tabs}</nav>\n{details}\n{summary}\n{dashboard}\n</div>\n<script>{script}</script>\n</body>\n</html>\n",
        title = REPORT_TITLE,
        style = STYLE,
        generated = generated_at,
        count = result.len(),
        tabs = tab_buttons,
        details = panel(DETAILS_PANEL, details_section(result)),
        summary = panel(SUMMARY_PANEL, summary_section(result)),
        dashboard = panel(DASHBOARD_PANEL, dashboard_section(result)),
        script = SCRIPT,
    )
}

fn active_class(active: bool) -> &'static str {
    if active {
        " active"
    } else {
        ""
    }
}

fn details_section(result: &AnalysisResult) -> String {
    let mut tables = DetailTables::new();
    render_detail_tables(&result.results, &mut tables);

    DetailTable::ALL
        .iter()
        .map(|&table| {
            let labels: Vec<&str> = table.columns().iter().map(|f| f.label()).collect();
            format!(
                "<h2>{}</h2><table id=\"{}\"><thead>{}</thead><tbody>{}</tbody></table>",
                table.title(),
                table.id(),
                header_html(&labels),
                tables.body(table).to_html()
            )
        })
        .collect()
}

fn summary_section(result: &AnalysisResult) -> String {
    let mut body = TableBody::new();
    match &result.scenario_summary {
        Some(rows) => render_scenario_summary(rows, Some(&mut body)),
        None => return "<p class=\"placeholder\">No scenario summary</p>".to_string(),
    }
    format!(
        "<table id=\"scenarioSummaryTable\"><thead>{}</thead><tbody>{}</tbody></table>",
        header_html(&SUMMARY_COLUMNS),
        body.to_html()
    )
}

fn dashboard_section(result: &AnalysisResult) -> String {
    if result.charts.is_empty() {
        return format!("<p class=\"placeholder\">No charts{}</p>", if result.is_empty() {
            format!(" ({})", NO_BREACHES_MESSAGE)
        } else {
            String::new()
        });
    }

    let mut figures = String::new();
    if let Some(chart) = result.charts.chart.as_deref().filter(|c| !c.is_empty()) {
        figures.push_str(&figure_html("breachChart", "Breaches", chart));
    }
    if let Some(dashboard) = &result.charts.dashboard {
        for (key, title, url) in dashboard.entries() {
            figures.push_str(&figure_html(key, title, url));
        }
    }
    format!("<div class=\"chart-grid\">{}</div>", figures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use breach_report_common::{BreachRecord, ChartImages, ScenarioSummaryRow};

    fn sample() -> AnalysisResult {
        AnalysisResult {
            results: vec![BreachRecord {
                order_id: Some("<1001>".to_string()),
                details: Some("<b>Missing</b> Cut".to_string()),
                ..Default::default()
            }],
            scenario_summary: Some(vec![ScenarioSummaryRow {
                derived_scenario: Some("Export".to_string()),
                num_orders: Some(3),
                ..Default::default()
            }]),
            charts: ChartImages {
                chart: Some("data:image/png;base64,AAAA".to_string()),
                dashboard: None,
            },
        }
    }

    #[test]
    fn test_report_contains_all_tables() {
        let html = render_report(&sample(), "2026-01-01 00:00");
        for table in DetailTable::ALL {
            assert!(html.contains(&format!("id=\"{}\"", table.id())));
        }
        assert!(html.contains("id=\"scenarioSummaryTable\""));
        assert!(html.contains("id=\"breachChart\""));
        assert!(html.contains("Generated 2026-01-01 00:00 / 1 breach record(s)"));
    }

    #[test]
    fn test_report_escapes_text_keeps_details_markup() {
        let html = render_report(&sample(), "now");
        assert!(html.contains("&lt;1001&gt;"));
        assert!(html.contains("<b>Missing</b> Cut"));
    }

    #[test]
    fn test_report_only_details_panel_active() {
        let html = render_report(&sample(), "now");
        assert!(html.contains("class=\"tab-content active\" id=\"details-panel\""));
        assert!(html.contains("class=\"tab-content\" id=\"summary-panel\""));
        assert!(html.contains("class=\"tab-content\" id=\"dashboard-panel\""));
    }

    #[test]
    fn test_empty_report_shows_placeholder() {
        let html = render_report(&AnalysisResult::default(), "now");
        assert!(html.contains(NO_BREACHES_MESSAGE));
        assert!(html.contains("No scenario summary"));
        assert!(!html.contains("<img"));
    }
}
