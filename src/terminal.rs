//! 端末用の表示（スピナー・ステータス行）

use breach_report_common::{AnalysisResult, ResultView, Status, StatusKind};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// `ResultPipeline` を端末に描画する
#[derive(Default)]
pub struct TerminalView {
    spinner: Option<ProgressBar>,
    status: Status,
    quiet: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 標準出力に何も書かない（テスト用）
    pub fn quiet() -> Self {
        Self { quiet: true, ..Self::default() }
    }

    /// 最後に表示したステータス
    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.spinner.is_some()
    }

    fn start_spinner(&mut self) {
        if self.quiet || self.spinner.is_some() {
            return;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            pb.set_style(style);
        }
        pb.set_message(self.status.text.clone());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(pb);
    }
}

impl ResultView for TerminalView {
    fn set_busy(&mut self, busy: bool) {
        if busy {
            self.start_spinner();
        } else if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    fn set_status(&mut self, status: Status) {
        tracing::debug!(kind = status.kind.as_str(), text = %status.text, "status");
        if let Some(pb) = &self.spinner {
            pb.set_message(status.text.clone());
        } else if !self.quiet {
            match status.kind {
                StatusKind::Success => println!("✔ {}", status.text),
                StatusKind::Busy => println!("- {}", status.text),
                StatusKind::Error | StatusKind::Idle => {}
            }
        }
        self.status = status;
    }

    fn alert(&mut self, message: &str) {
        if !self.quiet {
            eprintln!("❌ {}", message);
        }
    }

    fn hide_charts(&mut self) {}

    fn show_results(&mut self, result: &AnalysisResult) {
        let summary_rows = result.scenario_summary.as_ref().map_or(0, Vec::len);
        let charts = result.charts.chart.iter().count()
            + result.charts.dashboard.as_ref().map_or(0, |d| d.entries().len());
        if self.quiet {
            return;
        }
        if result.is_empty() {
            println!("✔ 逸脱なし（No breaches detected）");
        } else {
            println!("✔ 逸脱レコード: {}件", result.len());
        }
        println!("  シナリオサマリー: {}行 / グラフ: {}枚", summary_rows, charts);
    }
}
