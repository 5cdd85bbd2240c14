// "Forecasted Value" section: forecast table and chart for the chosen interval
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::view::{Arrangement, DashboardLayout, ForecastView};

use super::chart::LineChartView;
use super::price_table::PriceTableView;
use crate::config::ChartPalette;

#[component]
pub fn ForecastPanel(forecast: ForecastView, layout: DashboardLayout, palette: ChartPalette) -> Element {
    let ForecastView { interval, table, chart } = forecast;
    let direction = layout_direction(&layout);
    rsx! {
        section {
            h2 { style: "margin: 28px 0 4px;", "{layout.forecast_title}" }
            div { style: "margin-bottom: 12px; color: {palette.neutral};", "{interval.label()}" }
            div {
                style: "display: flex; flex-direction: {direction}; gap: 24px;",
                div {
                    style: "flex: 1; min-width: 280px;",
                    PriceTableView { table, height: layout.table_height, palette: palette.clone() }
                }
                LineChartView {
                    chart,
                    width: layout.chart_width,
                    height: layout.chart_height,
                    palette: palette.clone(),
                }
            }
        }
    }
}

/// CSS flex direction for the table / chart pair.
pub fn layout_direction(layout: &DashboardLayout) -> &'static str {
    match layout.arrangement {
        Arrangement::SideBySide => "row",
        Arrangement::Stacked => "column",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_direction() {
        assert_eq!(layout_direction(&DashboardLayout::wide()), "row");
        assert_eq!(layout_direction(&DashboardLayout::compact()), "column");
    }
}
