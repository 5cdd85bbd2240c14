// Indicators derived from a price series
pub mod pct_change;

pub use pct_change::{annotate, PercentageChange};

use serde_json::Value;
use shared::models::PricePoint;

// Common trait for all indicators
pub trait IndicatorCalculator: Send + Sync {
    type Output;

    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this indicator instance
    fn calculate(&self, data: &[PricePoint]) -> Vec<Self::Output>; // One output per input point
}
