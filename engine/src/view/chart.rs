use chrono::NaiveDate;
use shared::models::{PriceRecord, PriceSeries, YearFilter};
use shared::utils::date_format::{iso_date, long_date};
use shared::utils::peso_format::format_peso;

use super::Tone;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    Lines,
    LinesAndMarkers,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub price: f64,
    /// Hover text, one line per entry.
    pub tooltip: Vec<String>,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub mode: ChartMode,
    pub x_title: String,
    pub y_title: String,
    pub points: Vec<ChartPoint>,
}

/// Pixel area a chart is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

fn chart_point(record: &PriceRecord, date_label: fn(NaiveDate) -> String) -> ChartPoint {
    ChartPoint {
        date: record.date,
        price: record.price,
        tooltip: vec![
            format!("Date: {}", date_label(record.date)),
            format!("Price: {}", format_peso(record.price)),
            format!("Percentage Change: {}", record.change),
        ],
        tone: record.change.direction().into(),
    }
}

impl LineChart {
    fn new<'a>(
        mode: ChartMode,
        records: impl IntoIterator<Item = &'a PriceRecord>,
        date_label: fn(NaiveDate) -> String,
    ) -> Self {
        LineChart {
            mode,
            x_title: "Date".to_string(),
            y_title: "Price".to_string(),
            points: records.into_iter().map(|r| chart_point(r, date_label)).collect(),
        }
    }

    pub fn price_range(&self) -> Option<(f64, f64)> {
        let min = self.points.iter().map(|p| p.price).reduce(f64::min)?;
        let max = self.points.iter().map(|p| p.price).reduce(f64::max)?;
        Some((min, max))
    }

    /// Maps each point into the viewport: x by calendar position, y by price
    /// with the highest price at the top. Degenerate spans collapse to the centre.
    pub fn project(&self, viewport: Viewport) -> Vec<(f64, f64)> {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Vec::new();
        };
        let Some((min, max)) = self.price_range() else {
            return Vec::new();
        };
        let plot_w = (viewport.width - 2.0 * viewport.margin).max(0.0);
        let plot_h = (viewport.height - 2.0 * viewport.margin).max(0.0);
        let span_days = (last.date - first.date).num_days() as f64;
        let span_price = max - min;

        self.points
            .iter()
            .map(|p| {
                let x = if span_days > 0.0 {
                    viewport.margin + (p.date - first.date).num_days() as f64 / span_days * plot_w
                } else {
                    viewport.margin + plot_w / 2.0
                };
                let y = if span_price > 0.0 {
                    viewport.margin + (max - p.price) / span_price * plot_h
                } else {
                    viewport.margin + plot_h / 2.0
                };
                (x, y)
            })
            .collect()
    }
}

/// Historical line chart, narrowed to one year unless the filter is `All`.
/// Points keep the change computed against the full series.
pub fn history_chart(series: &PriceSeries, filter: YearFilter) -> LineChart {
    LineChart::new(ChartMode::Lines, series.select(filter), long_date)
}

pub fn forecast_chart(series: &PriceSeries) -> LineChart {
    LineChart::new(ChartMode::LinesAndMarkers, series.records(), iso_date)
}
