// Main dashboard body for a successfully rendered selection
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::view::DashboardView;

use super::chart::LineChartView;
use super::forecast_panel::{layout_direction, ForecastPanel};
use super::gauges::Gauges;
use super::price_table::PriceTableView;
use crate::config::ChartPalette;

#[component]
pub fn Dashboard(view: DashboardView, palette: ChartPalette) -> Element {
    let DashboardView { selection, layout, gauges, history_table, history_chart, forecast } = view;
    let direction = layout_direction(&layout);
    let caption = format!("{} prices, {}", selection.commodity, selection.year);

    rsx! {
        Gauges { gauges, palette: palette.clone() }

        section {
            h2 { style: "margin: 8px 0 12px;", "{caption}" }
            div {
                style: "display: flex; flex-direction: {direction}; gap: 24px;",
                div {
                    style: "flex: 1; min-width: 280px;",
                    PriceTableView { table: history_table, height: layout.table_height, palette: palette.clone() }
                }
                LineChartView {
                    chart: history_chart,
                    width: layout.chart_width,
                    height: layout.chart_height,
                    palette: palette.clone(),
                }
            }
        }

        ForecastPanel { forecast, layout: layout.clone(), palette }
    }
}
