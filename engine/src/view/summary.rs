use shared::models::PriceSeries;
use shared::utils::peso_format::format_peso;

use super::Tone;

/// Horizontal gauge bar; both gauges share the `[0, highest]` scale.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGauge {
    pub title: String,
    pub value: f64,
    pub scale_max: f64,
    pub tone: Tone,
}

impl PriceGauge {
    pub fn fill_ratio(&self) -> f64 {
        if self.scale_max > 0.0 {
            (self.value / self.scale_max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn label(&self) -> String {
        format_peso(self.value)
    }
}

/// Lowest and highest observed price, or nothing for an empty series.
pub fn price_gauges(series: &PriceSeries) -> Vec<PriceGauge> {
    let (Some(lowest), Some(highest)) = (series.lowest(), series.highest()) else {
        return Vec::new();
    };
    vec![
        PriceGauge { title: "Lowest Price".to_string(), value: lowest, scale_max: highest, tone: Tone::Negative },
        PriceGauge { title: "Highest Price".to_string(), value: highest, scale_max: highest, tone: Tone::Positive },
    ]
}
