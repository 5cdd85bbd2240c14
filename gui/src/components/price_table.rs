// Scrollable Date / Price / Percentage Change table
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::view::PriceTable;

use crate::config::ChartPalette;

const CELL_STYLE: &str = "padding: 6px 10px; border-bottom: 1px solid #eee;";

#[component]
pub fn PriceTableView(table: PriceTable, height: u32, palette: ChartPalette) -> Element {
    rsx! {
        div {
            style: "max-height: {height}px; overflow-y: auto; border: 1px solid {palette.grid}; border-radius: 8px;",
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px; color: {palette.foreground};",
                thead {
                    tr {
                        style: "position: sticky; top: 0; background: {palette.background}; text-align: left;",
                        th { style: CELL_STYLE, "{table.date_header}" }
                        th { style: CELL_STYLE, "{table.price_header}" }
                        th { style: CELL_STYLE, "{table.change_header}" }
                    }
                }
                tbody {
                    {table.rows.iter().map(|row| {
                        let change_style = format!("{} color: {};", CELL_STYLE, palette.tone_color(row.tone));
                        rsx! {
                            tr {
                                key: "{row.date}",
                                td { style: CELL_STYLE, "{row.date}" }
                                td { style: CELL_STYLE, "{row.price}" }
                                td { style: "{change_style}", "{row.change}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}
