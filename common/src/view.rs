//! テーブルのビューモデルと描画
//!
//! レコード → セル列 に変換し、HTML化はここだけで行う。
//! Details 以外のセルは必ずエスケープする。

use html_escape::{encode_double_quoted_attribute, encode_text};
use crate::columns::{DetailTable, Field};
use crate::format::{format_count, format_number, format_text};
use crate::types::{BreachRecord, ScenarioSummaryRow};

/// 結果0件時のプレースホルダー
pub const NO_BREACHES_MESSAGE: &str = "No breaches detected";

/// セル
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// そのままの文字列（描画時にエスケープ）
    Text(String),
    /// 書式付きテキスト（Details のみ）
    Markup(String),
}

impl Cell {
    pub fn as_str(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Markup(s) => s,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Cell::Text(s) => encode_text(s).into_owned(),
            Cell::Markup(s) => s.clone(),
        }
    }
}

/// 行
#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Cells(Vec<Cell>),
    /// 全列にまたがる説明行
    Placeholder { message: String, colspan: usize },
}

impl TableRow {
    pub fn to_html(&self) -> String {
        match self {
            TableRow::Cells(cells) => {
                let tds: String = cells
                    .iter()
                    .map(|c| format!("<td>{}</td>", c.to_html()))
                    .collect();
                format!("<tr>{}</tr>", tds)
            }
            TableRow::Placeholder { message, colspan } => format!(
                "<tr><td colspan=\"{}\" class=\"placeholder\">{}</td></tr>",
                colspan,
                encode_text(message)
            ),
        }
    }
}

/// テーブル本体（tbody相当）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableBody {
    rows: Vec<TableRow>,
}

impl TableBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn push(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_html(&self) -> String {
        self.rows
            .iter()
            .map(TableRow::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 4分割の詳細テーブル
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailTables {
    overview: TableBody,
    steps: TableBody,
    timing: TableBody,
    quantity: TableBody,
}

impl DetailTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self, table: DetailTable) -> &TableBody {
        match table {
            DetailTable::Overview => &self.overview,
            DetailTable::Steps => &self.steps,
            DetailTable::Timing => &self.timing,
            DetailTable::Quantity => &self.quantity,
        }
    }

    pub fn body_mut(&mut self, table: DetailTable) -> &mut TableBody {
        match table {
            DetailTable::Overview => &mut self.overview,
            DetailTable::Steps => &mut self.steps,
            DetailTable::Timing => &mut self.timing,
            DetailTable::Quantity => &mut self.quantity,
        }
    }
}

/// 1レコード分のセル列
pub fn record_cells(record: &BreachRecord, columns: &[Field]) -> Vec<Cell> {
    columns
        .iter()
        .map(|field| {
            let value = field.display_value(record);
            if field.is_markup() {
                Cell::Markup(value)
            } else {
                Cell::Text(value)
            }
        })
        .collect()
}

/// 詳細テーブルを作り直す
///
/// 各テーブルを空にしてから全レコードを積む。0件なら説明行を1行だけ置く。
pub fn render_detail_tables(records: &[BreachRecord], tables: &mut DetailTables) {
    for table in DetailTable::ALL {
        let columns = table.columns();
        let body = tables.body_mut(table);
        body.clear();

        if records.is_empty() {
            body.push(TableRow::Placeholder {
                message: NO_BREACHES_MESSAGE.to_string(),
                colspan: columns.len(),
            });
            continue;
        }

        for record in records {
            body.push(TableRow::Cells(record_cells(record, columns)));
        }
    }
}

/// サマリー1行分のセル列
pub fn summary_cells(row: &ScenarioSummaryRow) -> Vec<Cell> {
    vec![
        Cell::Text(format_text(row.label())),
        Cell::Text(format_count(row.num_orders)),
        Cell::Text(format_text(row.most_common_breach_type.as_deref())),
        Cell::Text(format_number(row.avg_missing_steps)),
        Cell::Text(format_number(row.avg_out_of_order_steps)),
    ]
}

/// シナリオサマリーを作り直す
///
/// 描画先テーブルが無い画面では何もしない。
pub fn render_scenario_summary(rows: &[ScenarioSummaryRow], body: Option<&mut TableBody>) {
    let Some(body) = body else {
        return;
    };
    body.clear();
    for row in rows {
        body.push(TableRow::Cells(summary_cells(row)));
    }
}

/// thead用の見出しHTML
pub fn header_html(labels: &[&str]) -> String {
    let ths: String = labels
        .iter()
        .map(|l| format!("<th>{}</th>", encode_text(l)))
        .collect();
    format!("<tr>{}</tr>", ths)
}

/// グラフ1枚分のHTML（src は属性としてエスケープ）
pub fn figure_html(id: &str, title: &str, src: &str) -> String {
    format!(
        "<figure class=\"chart\"><figcaption>{}</figcaption><img id=\"{}\" src=\"{}\" alt=\"{}\"></figure>",
        encode_text(title),
        encode_double_quoted_attribute(id),
        encode_double_quoted_attribute(src),
        encode_double_quoted_attribute(title)
    )
}
