//! 列定義
//!
//! BreachRecord の各属性を1つの `Field` で表し、表示テーブル・CSVの両方がここから列を引く。

use crate::format::{format_count, format_number, format_text};
use crate::types::BreachRecord;

/// Details 欄が空のときの表示
pub const NO_BREACH_MARKUP: &str = "<em>No Breach</em>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OrderId,
    CustomerId,
    ItemId,
    ExportFlag,
    DangerousFlag,
    DerivedScenario,
    ScenarioUsed,
    PlannedStepsCount,
    AsIsStepsCount,
    MissingStepsCount,
    OutOfOrderStepsCount,
    PlannedStart,
    PlannedEnd,
    ActualStart,
    ActualEnd,
    TimePlannedMinutes,
    TimeActualMinutes,
    TimeDeviationMinutes,
    TotalYield,
    TotalScrap,
    QuantityDeviationPercent,
    CaseId,
    BreachType,
    Details,
}

impl Field {
    /// CSV列順（ヘッダー順）
    pub const ALL: [Field; 24] = [
        Field::OrderId,
        Field::CustomerId,
        Field::ItemId,
        Field::ExportFlag,
        Field::DangerousFlag,
        Field::DerivedScenario,
        Field::ScenarioUsed,
        Field::PlannedStepsCount,
        Field::AsIsStepsCount,
        Field::MissingStepsCount,
        Field::OutOfOrderStepsCount,
        Field::PlannedStart,
        Field::PlannedEnd,
        Field::ActualStart,
        Field::ActualEnd,
        Field::TimePlannedMinutes,
        Field::TimeActualMinutes,
        Field::TimeDeviationMinutes,
        Field::TotalYield,
        Field::TotalScrap,
        Field::QuantityDeviationPercent,
        Field::CaseId,
        Field::BreachType,
        Field::Details,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::OrderId => "Order ID",
            Field::CustomerId => "Customer ID",
            Field::ItemId => "Item ID",
            Field::ExportFlag => "Export Flag",
            Field::DangerousFlag => "Dangerous Flag",
            Field::DerivedScenario => "Derived Scenario",
            Field::ScenarioUsed => "Scenario Used",
            Field::PlannedStepsCount => "Planned Steps Count",
            Field::AsIsStepsCount => "As-Is Steps Count",
            Field::MissingStepsCount => "Missing Steps Count",
            Field::OutOfOrderStepsCount => "Out-of-Order Steps Count",
            Field::PlannedStart => "Planned Start",
            Field::PlannedEnd => "Planned End",
            Field::ActualStart => "Actual Start",
            Field::ActualEnd => "Actual End",
            Field::TimePlannedMinutes => "Time Planned Minutes",
            Field::TimeActualMinutes => "Time Actual Minutes",
            Field::TimeDeviationMinutes => "Time Deviation Minutes",
            Field::TotalYield => "Total Yield",
            Field::TotalScrap => "Total Scrap",
            Field::QuantityDeviationPercent => "Quantity Deviation %",
            Field::CaseId => "Case ID",
            Field::BreachType => "Breach Type",
            Field::Details => "Details",
        }
    }

    /// マークアップとして描画してよい列か
    pub fn is_markup(self) -> bool {
        matches!(self, Field::Details)
    }

    /// 書式済みの値（表示・CSV共通）
    pub fn value(self, record: &BreachRecord) -> String {
        match self {
            Field::OrderId => format_text(record.order_id.as_deref()),
            Field::CustomerId => format_text(record.customer_id.as_deref()),
            Field::ItemId => format_text(record.item_id.as_deref()),
            Field::ExportFlag => format_text(record.export_flag.as_deref()),
            Field::DangerousFlag => format_text(record.dangerous_flag.as_deref()),
            Field::DerivedScenario => format_text(record.derived_scenario.as_deref()),
            Field::ScenarioUsed => format_text(record.scenario_used.as_deref()),
            Field::PlannedStepsCount => format_count(record.planned_steps_count),
            Field::AsIsStepsCount => format_count(record.as_is_steps_count),
            Field::MissingStepsCount => format_count(record.missing_steps_count),
            Field::OutOfOrderStepsCount => format_count(record.out_of_order_steps_count),
            Field::PlannedStart => format_text(record.planned_start.as_deref()),
            Field::PlannedEnd => format_text(record.planned_end.as_deref()),
            Field::ActualStart => format_text(record.actual_start.as_deref()),
            Field::ActualEnd => format_text(record.actual_end.as_deref()),
            Field::TimePlannedMinutes => format_number(record.time_planned_minutes),
            Field::TimeActualMinutes => format_number(record.time_actual_minutes),
            Field::TimeDeviationMinutes => format_number(record.time_deviation()),
            Field::TotalYield => format_number(record.total_yield),
            Field::TotalScrap => format_number(record.total_scrap),
            Field::QuantityDeviationPercent => format_number(record.quantity_deviation()),
            Field::CaseId => format_text(record.case_id.as_deref()),
            Field::BreachType => format_text(record.breach_type.as_deref()),
            Field::Details => format_text(record.details.as_deref()),
        }
    }

    /// テーブル表示用の値。Details が空なら "No Breach"
    pub fn display_value(self, record: &BreachRecord) -> String {
        match self {
            Field::Details if record.details.as_deref().map_or(true, str::is_empty) => {
                NO_BREACH_MARKUP.to_string()
            }
            _ => self.value(record),
        }
    }
}

/// 詳細テーブル（4分割）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailTable {
    Overview,
    Steps,
    Timing,
    Quantity,
}

impl DetailTable {
    pub const ALL: [DetailTable; 4] = [
        DetailTable::Overview,
        DetailTable::Steps,
        DetailTable::Timing,
        DetailTable::Quantity,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DetailTable::Overview => "overviewTable",
            DetailTable::Steps => "stepsTable",
            DetailTable::Timing => "timingTable",
            DetailTable::Quantity => "quantityTable",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DetailTable::Overview => "Order Overview",
            DetailTable::Steps => "Process Steps",
            DetailTable::Timing => "Timing",
            DetailTable::Quantity => "Quantity",
        }
    }

    pub fn columns(self) -> &'static [Field] {
        match self {
            DetailTable::Overview => &[
                Field::OrderId,
                Field::CustomerId,
                Field::ItemId,
                Field::CaseId,
                Field::ExportFlag,
                Field::DangerousFlag,
                Field::DerivedScenario,
                Field::ScenarioUsed,
            ],
            DetailTable::Steps => &[
                Field::OrderId,
                Field::PlannedStepsCount,
                Field::AsIsStepsCount,
                Field::MissingStepsCount,
                Field::OutOfOrderStepsCount,
                Field::BreachType,
                Field::Details,
            ],
            DetailTable::Timing => &[
                Field::OrderId,
                Field::PlannedStart,
                Field::PlannedEnd,
                Field::ActualStart,
                Field::ActualEnd,
                Field::TimePlannedMinutes,
                Field::TimeActualMinutes,
                Field::TimeDeviationMinutes,
            ],
            DetailTable::Quantity => &[
                Field::OrderId,
                Field::TotalYield,
                Field::TotalScrap,
                Field::QuantityDeviationPercent,
                Field::BreachType,
            ],
        }
    }
}

/// シナリオサマリーの列見出し
pub const SUMMARY_COLUMNS: [&str; 5] = [
    "Scenario",
    "Orders",
    "Most Common Breach Type",
    "Avg Missing Steps",
    "Avg Out-of-Order Steps",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_fields_unique() {
        let unique: HashSet<Field> = Field::ALL.iter().copied().collect();
        assert_eq!(unique.len(), Field::ALL.len());

        let labels: HashSet<&str> = Field::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels.len(), Field::ALL.len());
    }

    #[test]
    fn test_detail_tables_cover_every_field() {
        let shown: HashSet<Field> = DetailTable::ALL
            .iter()
            .flat_map(|t| t.columns().iter().copied())
            .collect();
        for field in Field::ALL {
            assert!(shown.contains(&field), "テーブルに無い列: {:?}", field);
        }
    }

    #[test]
    fn test_only_details_is_markup() {
        let markup: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_markup()).collect();
        assert_eq!(markup, vec![Field::Details]);
    }

    #[test]
    fn test_value_nan_safe() {
        let record = BreachRecord {
            time_planned_minutes: Some(f64::NAN),
            ..Default::default()
        };
        for field in Field::ALL {
            let value = field.value(&record);
            assert!(value.is_empty(), "{:?} が空でない: {}", field, value);
            assert_ne!(value, "NaN");
        }
    }

    #[test]
    fn test_quantity_deviation_value() {
        let record = BreachRecord {
            total_yield: Some(80.0),
            total_scrap: Some(20.0),
            ..Default::default()
        };
        assert_eq!(Field::QuantityDeviationPercent.value(&record), "20.00");

        let zero = BreachRecord {
            total_yield: Some(0.0),
            total_scrap: Some(0.0),
            ..Default::default()
        };
        assert_eq!(Field::QuantityDeviationPercent.value(&zero), "0.00");
    }

    #[test]
    fn test_details_display_default() {
        let record = BreachRecord::default();
        assert_eq!(Field::Details.display_value(&record), NO_BREACH_MARKUP);
        assert_eq!(Field::Details.value(&record), "");
    }
}
