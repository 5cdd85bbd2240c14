// Period-over-period percentage change
use super::IndicatorCalculator;
use serde_json::Value;
use shared::models::{PercentChange, PricePoint, PriceRecord, PriceSeries};

pub struct PercentageChange {
    name: String,
    periods: usize,
}

impl PercentageChange {
    pub fn new() -> Self {
        Self {
            name: "PCT_CHANGE".to_string(),
            periods: 1,
        }
    }
}

impl Default for PercentageChange {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorCalculator for PercentageChange {
    type Output = PercentChange;

    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "periods": self.periods })
    }

    // The first point has no reference and is reported as a flat 0%.
    fn calculate(&self, data: &[PricePoint]) -> Vec<PercentChange> {
        let mut results = Vec::with_capacity(data.len());
        if data.is_empty() {
            return results;
        }
        results.push(PercentChange::ZERO);
        results.extend(data.windows(2).map(|w| PercentChange::between(w[0].price, w[1].price)));
        results
    }
}

/// Attaches the percentage change to each point, producing the final series.
pub fn annotate(points: Vec<PricePoint>) -> PriceSeries {
    let indicator = PercentageChange::new();
    let changes = indicator.calculate(&points);
    tracing::debug!(
        indicator = indicator.name(),
        parameters = %indicator.parameters(),
        points = points.len(),
        "Computed indicator"
    );
    let records = points
        .into_iter()
        .zip(changes)
        .map(|(p, change)| PriceRecord { date: p.date, price: p.price, change })
        .collect();
    PriceSeries::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::Direction;

    fn create_point(day: u32, price: f64) -> PricePoint {
        PricePoint { date: NaiveDate::from_ymd_opt(2020, 1, day).unwrap(), price }
    }

    #[test]
    fn test_pct_change_calculation() {
        let points = vec![create_point(1, 30.0), create_point(2, 33.0), create_point(3, 29.7), create_point(4, 29.7)];
        let results = PercentageChange::new().calculate(&points);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0], PercentChange::ZERO);
        for i in 1..points.len() {
            let expected = (points[i].price - points[i - 1].price) / points[i - 1].price;
            assert!((results[i].ratio().unwrap() - expected).abs() < 1e-12, "Mismatch at index {}", i);
        }
        assert_eq!(results[1].direction(), Direction::Up);
        assert_eq!(results[2].direction(), Direction::Down);
        assert_eq!(results[3].direction(), Direction::Flat);
    }

    #[test]
    fn test_pct_change_single_and_empty() {
        assert!(PercentageChange::new().calculate(&[]).is_empty());
        assert_eq!(PercentageChange::new().calculate(&[create_point(1, 12.0)]), vec![PercentChange::ZERO]);
    }

    #[test]
    fn test_annotate_builds_series() {
        let series = annotate(vec![create_point(1, 30.0), create_point(2, 33.0)]);
        let records = series.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].change.to_string(), "0.00%");
        assert_eq!(records[1].change.to_string(), "10.00% ↑");
        assert_eq!(records[1].price, 33.0);
    }

    #[test]
    fn test_parameters() {
        let indicator = PercentageChange::default();
        assert_eq!(indicator.name(), "PCT_CHANGE");
        assert_eq!(indicator.parameters(), serde_json::json!({ "periods": 1 }));
    }
}
