// SVG line chart with hover tooltips
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::view::{ChartMode, LineChart, Viewport};
use shared::utils::date_format::iso_date;
use shared::utils::peso_format::format_peso;

use crate::config::ChartPalette;

const MARGIN: f64 = 48.0;
const TOOLTIP_WIDTH: f64 = 220.0;
const TOOLTIP_OFFSET: f64 = 12.0;

/// SVG `points` attribute for the projected coordinates.
pub fn polyline_points(coords: &[(f64, f64)]) -> String {
    coords.iter().map(|(x, y)| format!("{:.1},{:.1}", x, y)).collect::<Vec<_>>().join(" ")
}

/// Top-left corner of the tooltip box: right of the point, or left of it when
/// the box would overflow the chart.
pub fn tooltip_position(point: (f64, f64), chart_width: f64) -> (f64, f64) {
    let (x, y) = point;
    let left = if x + TOOLTIP_OFFSET + TOOLTIP_WIDTH > chart_width {
        x - TOOLTIP_OFFSET - TOOLTIP_WIDTH
    } else {
        x + TOOLTIP_OFFSET
    };
    (left.max(0.0), (y - TOOLTIP_OFFSET).max(0.0))
}

#[component]
pub fn LineChartView(chart: LineChart, width: u32, height: u32, palette: ChartPalette) -> Element {
    let mut hovered = use_signal(|| None::<usize>);

    let viewport = Viewport { width: width as f64, height: height as f64, margin: MARGIN };
    let coords = chart.project(viewport);
    let (Some((min, max)), Some(first), Some(last)) = (chart.price_range(), chart.points.first(), chart.points.last())
    else {
        return rsx! {
            div {
                style: "width: {width}px; height: {height}px; display: flex; align-items: center; justify-content: center; color: {palette.neutral}; border: 1px dashed {palette.grid};",
                "No prices for this selection"
            }
        };
    };

    let path = polyline_points(&coords);
    let right = viewport.width - MARGIN;
    let bottom = viewport.height - MARGIN;
    let mid_y = viewport.height / 2.0;
    let label_x = MARGIN - 6.0;
    let date_y = bottom + 16.0;
    let x_title_x = viewport.width / 2.0;
    let x_title_y = bottom + 36.0;
    let (min_label, max_label) = (format_peso(min), format_peso(max));
    let (first_date, last_date) = (iso_date(first.date), iso_date(last.date));
    let show_markers = chart.mode == ChartMode::LinesAndMarkers;
    let marker_fill = if show_markers { palette.marker.clone() } else { "transparent".to_string() };
    let marker_radius = if show_markers { 4 } else { 7 };

    let tooltip = hovered().and_then(|i| chart.points.get(i).zip(coords.get(i).copied())).and_then(|(point, at)| {
        let (left, top) = tooltip_position(at, viewport.width);
        let accent = palette.tone_color(point.tone).to_string();
        rsx! {
            div {
                style: "position: absolute; left: {left}px; top: {top}px; width: {TOOLTIP_WIDTH}px; padding: 8px 10px; font-size: 12px; background: {palette.background}; border: 1px solid {accent}; border-radius: 6px; box-shadow: 0 4px 12px rgba(0,0,0,0.12); pointer-events: none;",
                for entry in point.tooltip.iter() {
                    div { "{entry}" }
                }
            }
        }
    });

    rsx! {
        div {
            style: "position: relative; width: {width}px;",
            svg {
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",
                style: "background: {palette.background};",
                onmouseleave: move |_| hovered.set(None),

                line { x1: "{MARGIN}", y1: "{bottom}", x2: "{right}", y2: "{bottom}", stroke: "{palette.grid}" }
                line { x1: "{MARGIN}", y1: "{MARGIN}", x2: "{MARGIN}", y2: "{bottom}", stroke: "{palette.grid}" }
                line { x1: "{MARGIN}", y1: "{MARGIN}", x2: "{right}", y2: "{MARGIN}", stroke: "{palette.grid}", stroke_dasharray: "4 4" }

                text { x: "{label_x}", y: "{MARGIN}", text_anchor: "end", font_size: "11", fill: "{palette.neutral}", "{max_label}" }
                text { x: "{label_x}", y: "{bottom}", text_anchor: "end", font_size: "11", fill: "{palette.neutral}", "{min_label}" }
                text { x: "{MARGIN}", y: "{date_y}", font_size: "11", fill: "{palette.neutral}", "{first_date}" }
                text { x: "{right}", y: "{date_y}", text_anchor: "end", font_size: "11", fill: "{palette.neutral}", "{last_date}" }
                text { x: "{x_title_x}", y: "{x_title_y}", text_anchor: "middle", font_size: "12", fill: "{palette.foreground}", "{chart.x_title}" }
                text {
                    x: "12",
                    y: "{mid_y}",
                    transform: "rotate(-90 12 {mid_y})",
                    text_anchor: "middle",
                    font_size: "12",
                    fill: "{palette.foreground}",
                    "{chart.y_title}"
                }

                polyline { points: "{path}", fill: "none", stroke: "{palette.line}", stroke_width: "2" }

                {coords.iter().copied().enumerate().map(|(i, (x, y))| {
                    let fill = marker_fill.clone();
                    rsx! {
                        circle {
                            key: "{i}",
                            cx: "{x}",
                            cy: "{y}",
                            r: "{marker_radius}",
                            fill: "{fill}",
                            onmouseenter: move |_| hovered.set(Some(i)),
                        }
                    }
                })}
            }
            {tooltip}
        }
    }
}
