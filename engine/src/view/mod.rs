// View models for the dashboard. Formatting and filtering only; every number
// shown here was already computed by the normalizer.
pub mod chart;
pub mod layout;
pub mod summary;
pub mod table;

pub use chart::{ChartMode, ChartPoint, LineChart, Viewport};
pub use layout::{Arrangement, DashboardLayout, DashboardLayoutBuilder};
pub use summary::PriceGauge;
pub use table::{PriceTable, TableRow};

use shared::models::{Direction, ForecastInterval, Selection};

/// Colour intent of a value; the GUI theme maps it to actual colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl From<Direction> for Tone {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Tone::Positive,
            Direction::Down => Tone::Negative,
            Direction::Flat => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastView {
    pub interval: ForecastInterval,
    pub table: PriceTable,
    pub chart: LineChart,
}

/// Everything one render pass produces for a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selection: Selection,
    pub layout: DashboardLayout,
    pub gauges: Vec<PriceGauge>,
    pub history_table: PriceTable,
    pub history_chart: LineChart,
    pub forecast: ForecastView,
}
