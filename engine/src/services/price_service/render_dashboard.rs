// Builds the full dashboard view for one selection
use shared::models::{PriceSeries, Selection};

use crate::view::chart::{forecast_chart, history_chart};
use crate::view::summary::price_gauges;
use crate::view::table::{forecast_table, history_table};
use crate::view::{DashboardLayout, DashboardView, ForecastView};

pub fn build_view(
    selection: &Selection,
    layout: &DashboardLayout,
    history: &PriceSeries,
    forecast: &PriceSeries,
    forecast_price_header: &str,
) -> DashboardView {
    let gauges = if layout.show_gauges { price_gauges(history) } else { Vec::new() };
    DashboardView {
        selection: *selection,
        layout: layout.clone(),
        gauges,
        history_table: history_table(history),
        history_chart: history_chart(history, selection.year),
        forecast: ForecastView {
            interval: selection.interval,
            table: forecast_table(forecast, forecast_price_header),
            chart: forecast_chart(forecast),
        },
    }
}
