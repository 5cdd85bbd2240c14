// engine/src/services/price_service/mod.rs
// PriceService wires the catalog, the normalizers and the view builders into
// one pipeline. It keeps no state between calls: every call re-reads the
// workbook from disk.
use shared::models::{Commodity, ForecastInterval, PriceSeries, Selection};

use crate::config::EngineSettings;
use crate::data::DataCatalog;
use crate::error::EngineError;
use crate::view::{DashboardLayout, DashboardView};

pub mod load_forecast;
pub mod load_history;
pub mod render_dashboard;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceService {
    catalog: DataCatalog,
    settings: EngineSettings,
}

impl PriceService {
    pub fn new(settings: EngineSettings) -> Self {
        let catalog = DataCatalog::new(&settings.data_dir, settings.csv_delimiter as u8);
        PriceService { catalog, settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn load_history(&self, commodity: Commodity) -> Result<PriceSeries, EngineError> {
        load_history::handle_load_history(&self.catalog, commodity).inspect_err(|e| {
            tracing::error!(commodity = %commodity, error = %e, "Failed to load historical prices");
        })
    }

    pub fn load_forecast(&self, commodity: Commodity, interval: ForecastInterval) -> Result<PriceSeries, EngineError> {
        load_forecast::handle_load_forecast(&self.catalog, &self.settings.forecast, commodity, interval).inspect_err(
            |e| {
                tracing::error!(commodity = %commodity, interval = %interval, error = %e, "Failed to load forecast");
            },
        )
    }

    /// Runs the whole pipeline for one selection. Any failure aborts the selection.
    pub fn render(&self, selection: &Selection, layout: &DashboardLayout) -> Result<DashboardView, EngineError> {
        tracing::info!(
            commodity = %selection.commodity,
            year = %selection.year,
            interval = %selection.interval,
            "Rendering selection"
        );
        let history = self.load_history(selection.commodity)?;
        let forecast = self.load_forecast(selection.commodity, selection.interval)?;
        let view = render_dashboard::build_view(
            selection,
            layout,
            &history,
            &forecast,
            &self.settings.forecast.price_column,
        );
        tracing::info!(
            commodity = %selection.commodity,
            history_records = history.len(),
            chart_points = view.history_chart.points.len(),
            forecast_records = forecast.len(),
            "Rendered selection"
        );
        Ok(view)
    }
}
