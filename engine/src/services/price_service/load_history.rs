// Handler for loading a commodity's historical series
use shared::models::{Commodity, PriceSeries};

use crate::data::DataCatalog;
use crate::error::EngineError;
use crate::normalize::normalize_history;

pub fn handle_load_history(catalog: &DataCatalog, commodity: Commodity) -> Result<PriceSeries, EngineError> {
    let mut workbook = catalog.open(commodity)?;
    let sheet = workbook.default_sheet()?;
    tracing::debug!(
        commodity = %commodity,
        path = %workbook.path().display(),
        rows = sheet.row_count(),
        columns = sheet.column_count(),
        "Loaded historical sheet"
    );
    normalize_history(&sheet)
}
