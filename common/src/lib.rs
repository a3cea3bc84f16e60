//! Breach Report Common Library
//!
//! CLIとWeb(WASM)で共有される型・ビューモデル・CSV出力・解析パイプライン

pub mod types;
pub mod lenient;
pub mod error;
pub mod format;
pub mod columns;
pub mod view;
pub mod csv_export;
pub mod response;
pub mod tabs;
pub mod pipeline;

pub use types::{AnalysisResult, BreachRecord, ChartImages, DashboardCharts, ScenarioSummaryRow};
pub use error::{Error, Result};
pub use columns::{DetailTable, Field, SUMMARY_COLUMNS};
pub use view::{render_detail_tables, render_scenario_summary, Cell, DetailTables, TableBody, TableRow};
pub use csv_export::{export_csv, CsvExport, CsvQuoting};
pub use response::{parse_response, AnalyzerConfig, Endpoint};
pub use tabs::{Tab, TabStrip};
pub use pipeline::{AnalysisClient, ResultPipeline, ResultView, Status, StatusKind};
