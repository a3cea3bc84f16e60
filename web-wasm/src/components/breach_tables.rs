//! 詳細テーブル（4分割）
//!
//! セルの組み立ては common::view が行う。ここでは Text はテキストノード、
//! Markup (Details) だけを inner_html で差し込む。

use leptos::prelude::*;
use breach_report_common::{Cell, DetailTable, DetailTables, TableBody, TableRow};

/// tbody の中身
pub fn render_rows(body: &TableBody) -> impl IntoView {
    body.rows()
        .iter()
        .map(|row| match row {
            TableRow::Cells(cells) => view! {
                <tr>{cells.iter().map(render_cell).collect_view()}</tr>
            }
            .into_any(),
            TableRow::Placeholder { message, colspan } => view! {
                <tr>
                    <td colspan=colspan.to_string() class="placeholder">{message.clone()}</td>
                </tr>
            }
            .into_any(),
        })
        .collect_view()
}

fn render_cell(cell: &Cell) -> impl IntoView {
    match cell {
        Cell::Text(text) => view! { <td>{text.clone()}</td> }.into_any(),
        Cell::Markup(markup) => view! { <td inner_html=markup.clone()></td> }.into_any(),
    }
}

#[component]
pub fn BreachTables(tables: RwSignal<DetailTables>) -> impl IntoView {
    view! {
        <div class="breach-tables">
            {DetailTable::ALL
                .into_iter()
                .map(|table| {
                    let headers = table
                        .columns()
                        .iter()
                        .map(|field| view! { <th>{field.label()}</th> })
                        .collect_view();
                    view! {
                        <section class="table-section">
                            <h3>{table.title()}</h3>
                            <table id=table.id()>
                                <thead>
                                    <tr>{headers}</tr>
                                </thead>
                                <tbody>
                                    {move || tables.with(|t| render_rows(t.body(table)))}
                                </tbody>
                            </table>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
