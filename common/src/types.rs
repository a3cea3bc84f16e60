//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - BreachRecord: 受注・品目ごとの逸脱レコード
//! - ScenarioSummaryRow: シナリオ別サマリー
//! - ChartImages: サーバー生成のグラフ画像参照
//! - AnalysisResult: 1回の解析で得られる結果一式

use serde::{Deserialize, Serialize};
use crate::lenient;

/// 逸脱レコード
///
/// キー名は解析サーバーのJSON（`Order_ID` など）に合わせる。
/// レスポンスに無いフィールドは None として扱い、エラーにしない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreachRecord {
    #[serde(rename = "Order_ID", deserialize_with = "lenient::text")]
    pub order_id: Option<String>,

    #[serde(rename = "Customer_ID", deserialize_with = "lenient::text")]
    pub customer_id: Option<String>,

    #[serde(rename = "Item_ID", deserialize_with = "lenient::text")]
    pub item_id: Option<String>,

    #[serde(rename = "Case_ID", deserialize_with = "lenient::text")]
    pub case_id: Option<String>,

    #[serde(rename = "Export_Flag", deserialize_with = "lenient::text")]
    pub export_flag: Option<String>,

    #[serde(rename = "Dangerous_Flag", deserialize_with = "lenient::text")]
    pub dangerous_flag: Option<String>,

    #[serde(rename = "Derived_Scenario", deserialize_with = "lenient::text")]
    pub derived_scenario: Option<String>,

    #[serde(rename = "Scenario_Used", deserialize_with = "lenient::text")]
    pub scenario_used: Option<String>,

    /// "None" は逸脱なし
    #[serde(rename = "Breach_Type", deserialize_with = "lenient::text")]
    pub breach_type: Option<String>,

    #[serde(rename = "Planned_Steps_Count", deserialize_with = "lenient::count")]
    pub planned_steps_count: Option<u64>,

    #[serde(rename = "As_Is_Steps_Count", deserialize_with = "lenient::count")]
    pub as_is_steps_count: Option<u64>,

    #[serde(rename = "Missing_Steps_Count", deserialize_with = "lenient::count")]
    pub missing_steps_count: Option<u64>,

    #[serde(rename = "Out_of_Order_Steps_Count", deserialize_with = "lenient::count")]
    pub out_of_order_steps_count: Option<u64>,

    #[serde(rename = "Planned_Start", deserialize_with = "lenient::text")]
    pub planned_start: Option<String>,

    #[serde(rename = "Planned_End", deserialize_with = "lenient::text")]
    pub planned_end: Option<String>,

    #[serde(rename = "Actual_Start", deserialize_with = "lenient::text")]
    pub actual_start: Option<String>,

    #[serde(rename = "Actual_End", deserialize_with = "lenient::text")]
    pub actual_end: Option<String>,

    #[serde(rename = "Time_Planned_Minutes", deserialize_with = "lenient::number")]
    pub time_planned_minutes: Option<f64>,

    #[serde(rename = "Time_Actual_Minutes", deserialize_with = "lenient::number")]
    pub time_actual_minutes: Option<f64>,

    #[serde(rename = "Time_Deviation_Minutes", deserialize_with = "lenient::number")]
    pub time_deviation_minutes: Option<f64>,

    #[serde(rename = "Total_Yield", alias = "Final_Yield_Quantity", deserialize_with = "lenient::number")]
    pub total_yield: Option<f64>,

    #[serde(rename = "Total_Scrap", alias = "Total_Scrap_Quantity", deserialize_with = "lenient::number")]
    pub total_scrap: Option<f64>,

    #[serde(rename = "Quantity_Deviation_Percent", deserialize_with = "lenient::number")]
    pub quantity_deviation_percent: Option<f64>,

    /// 書式付きテキスト（マークアップをそのまま描画する唯一のフィールド）
    #[serde(rename = "Details", deserialize_with = "lenient::text")]
    pub details: Option<String>,
}

impl BreachRecord {
    /// 時間差（分）。サーバー値が無ければ 実績 − 計画
    pub fn time_deviation(&self) -> Option<f64> {
        self.time_deviation_minutes.or_else(|| {
            match (self.time_actual_minutes, self.time_planned_minutes) {
                (Some(actual), Some(planned)) => Some(actual - planned),
                _ => None,
            }
        })
    }

    /// 数量逸脱率(%) = scrap / (yield + scrap) × 100。分母0なら0
    pub fn quantity_deviation(&self) -> Option<f64> {
        self.quantity_deviation_percent.or_else(|| {
            let (total_yield, scrap) = (self.total_yield?, self.total_scrap?);
            Some(quantity_deviation_percent(total_yield, scrap))
        })
    }
}

/// 数量逸脱率の計算
pub fn quantity_deviation_percent(total_yield: f64, scrap: f64) -> f64 {
    let total = total_yield + scrap;
    if total == 0.0 {
        0.0
    } else {
        scrap / total * 100.0
    }
}

/// シナリオ別サマリー行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioSummaryRow {
    #[serde(rename = "Derived_Scenario", deserialize_with = "lenient::text")]
    pub derived_scenario: Option<String>,

    /// 旧形式のキー
    #[serde(rename = "Scenario", deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,

    #[serde(rename = "Num_Orders", deserialize_with = "lenient::count")]
    pub num_orders: Option<u64>,

    #[serde(rename = "Most_Common_Breach_Type", deserialize_with = "lenient::text")]
    pub most_common_breach_type: Option<String>,

    #[serde(rename = "Avg_Missing_Steps", deserialize_with = "lenient::strict_number")]
    pub avg_missing_steps: Option<f64>,

    #[serde(rename = "Avg_Out_of_Order_Steps", deserialize_with = "lenient::strict_number")]
    pub avg_out_of_order_steps: Option<f64>,
}

impl ScenarioSummaryRow {
    pub fn label(&self) -> Option<&str> {
        self.derived_scenario.as_deref().or(self.scenario.as_deref())
    }
}

/// ダッシュボード画像（6種）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardCharts {
    pub scenario_summary: Option<String>,
    pub breach_counts: Option<String>,
    pub breach_type_dist: Option<String>,
    pub impact_chart: Option<String>,
    pub scenario_breach_type: Option<String>,
    pub time_dev_dist: Option<String>,
}

impl DashboardCharts {
    /// (キー, 見出し, URL) の一覧。URLの無いものは除く
    pub fn entries(&self) -> Vec<(&'static str, &'static str, &str)> {
        [
            ("scenario_summary", "Scenario Summary", &self.scenario_summary),
            ("breach_counts", "Breach Counts", &self.breach_counts),
            ("breach_type_dist", "Breach Type Distribution", &self.breach_type_dist),
            ("impact_chart", "Impact", &self.impact_chart),
            ("scenario_breach_type", "Breach Type by Scenario", &self.scenario_breach_type),
            ("time_dev_dist", "Time Deviation Distribution", &self.time_dev_dist),
        ]
        .into_iter()
        .filter_map(|(key, title, url)| {
            url.as_deref()
                .filter(|u| !u.is_empty())
                .map(|u| (key, title, u))
        })
        .collect()
    }
}

/// グラフ画像参照（URL または data URI）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartImages {
    pub chart: Option<String>,
    pub dashboard: Option<DashboardCharts>,
}

impl ChartImages {
    pub fn is_empty(&self) -> bool {
        self.chart.as_deref().map_or(true, str::is_empty)
            && self.dashboard.as_ref().map_or(true, |d| d.entries().is_empty())
    }
}

/// 解析結果一式
///
/// 成功レスポンスごとに丸ごと置き換える。部分更新はしない。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub results: Vec<BreachRecord>,
    pub scenario_summary: Option<Vec<ScenarioSummaryRow>>,
    #[serde(flatten)]
    pub charts: ChartImages,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}
