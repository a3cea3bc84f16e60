//! パイプラインに渡すブラウザ側ビュー
//!
//! 各操作をシグナル更新に置き換える。DOMは signals を読むコンポーネント側が組み立てる。

use leptos::prelude::*;
use breach_report_common::{
    render_detail_tables, render_scenario_summary, AnalysisResult, ChartImages, DetailTables,
    ResultView, Status, TableBody,
};

/// 画面の状態（シグナルの束）
#[derive(Clone, Copy)]
pub struct SignalView {
    pub busy: RwSignal<bool>,
    pub status: RwSignal<Status>,
    pub detail_tables: RwSignal<DetailTables>,
    pub summary: RwSignal<TableBody>,
    pub charts: RwSignal<Option<ChartImages>>,
}

impl SignalView {
    pub fn new() -> Self {
        let mut tables = DetailTables::new();
        render_detail_tables(&[], &mut tables);

        Self {
            busy: RwSignal::new(false),
            status: RwSignal::new(Status::default()),
            detail_tables: RwSignal::new(tables),
            summary: RwSignal::new(TableBody::new()),
            charts: RwSignal::new(None),
        }
    }
}

impl ResultView for SignalView {
    fn set_busy(&mut self, busy: bool) {
        self.busy.set(busy);
    }

    fn set_status(&mut self, status: Status) {
        self.status.set(status);
    }

    fn alert(&mut self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn hide_charts(&mut self) {
        self.charts.set(None);
    }

    fn show_results(&mut self, result: &AnalysisResult) {
        self.detail_tables
            .update(|tables| render_detail_tables(&result.results, tables));

        // サマリーは届いたときだけ描き直す
        if let Some(rows) = &result.scenario_summary {
            self.summary
                .update(|body| render_scenario_summary(rows, Some(body)));
        }

        if result.charts.is_empty() {
            self.charts.set(None);
        } else {
            self.charts.set(Some(result.charts.clone()));
        }
    }
}
