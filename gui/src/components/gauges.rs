// Lowest / highest price gauges
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::view::PriceGauge;

use crate::config::ChartPalette;

#[component]
pub fn Gauges(gauges: Vec<PriceGauge>, palette: ChartPalette) -> Element {
    if gauges.is_empty() {
        return None;
    }

    rsx! {
        div {
            style: "display: flex; gap: 24px; margin-bottom: 20px;",
            {gauges.iter().map(|gauge| {
                let color = palette.tone_color(gauge.tone).to_string();
                let fill = format!("{:.1}%", gauge.fill_ratio() * 100.0);
                let label = gauge.label();
                rsx! {
                    div {
                        key: "{gauge.title}",
                        style: "flex: 1; padding: 12px 16px; border: 1px solid {palette.grid}; border-radius: 8px;",
                        div { style: "font-size: 13px; color: {palette.neutral};", "{gauge.title}" }
                        div { style: "font-size: 28px; font-weight: 700; color: {color};", "{label}" }
                        div {
                            style: "height: 10px; margin-top: 8px; border-radius: 5px; background: {palette.gauge_track};",
                            div { style: "height: 100%; width: {fill}; border-radius: 5px; background: {color};" }
                        }
                    }
                }
            })}
        }
    }
}
