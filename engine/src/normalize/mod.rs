// Sheet -> PriceSeries normalization.
//
// Every path ends in the same place: points with strictly increasing dates,
// annotated with their percentage change. Any bad cell aborts the whole sheet.
pub mod fill;
pub mod forecast;
pub mod history;

pub use forecast::{normalize_forecast, ForecastRules};
pub use history::normalize_history;

use shared::models::PricePoint;

use crate::error::EngineError;

pub(crate) fn ensure_increasing(points: &[PricePoint]) -> Result<(), EngineError> {
    match points.windows(2).find(|w| w[1].date <= w[0].date) {
        Some(w) => Err(EngineError::OrderingError { previous: w[0].date, current: w[1].date }),
        None => Ok(()),
    }
}
