// Handler for loading a commodity's forecast sub-sheet
use shared::models::{Commodity, ForecastInterval, PriceSeries};

use crate::config::ForecastSettings;
use crate::data::DataCatalog;
use crate::error::EngineError;
use crate::normalize::{normalize_forecast, ForecastRules};

pub fn handle_load_forecast(
    catalog: &DataCatalog,
    settings: &ForecastSettings,
    commodity: Commodity,
    interval: ForecastInterval,
) -> Result<PriceSeries, EngineError> {
    let sheet_name = interval.sheet_name();
    let mut workbook = catalog.open(commodity)?;
    let sheet = workbook.sheet(sheet_name)?;
    let rules = ForecastRules::for_sheet(settings, sheet_name);
    let series = normalize_forecast(&sheet, &rules)?;

    if series.len() != interval.horizon() {
        tracing::debug!(
            commodity = %commodity,
            sheet = sheet_name,
            records = series.len(),
            horizon = interval.horizon(),
            "Forecast length differs from the interval horizon"
        );
    }
    Ok(series)
}
