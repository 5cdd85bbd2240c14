// Sidebar with the three selectors: root crop, year and forecast interval
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::{Commodity, ForecastInterval, Selection, SelectionError, YearFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorField {
    Commodity,
    Year,
    Interval,
}

/// Applies the raw `<select>` value for one field to the current selection.
pub fn apply_choice(selection: Selection, field: SelectorField, value: &str) -> Result<Selection, SelectionError> {
    Ok(match field {
        SelectorField::Commodity => Selection { commodity: value.parse()?, ..selection },
        SelectorField::Year => Selection { year: value.parse()?, ..selection },
        SelectorField::Interval => Selection { interval: value.parse()?, ..selection },
    })
}

const LABEL_STYLE: &str = "display: block; margin: 16px 0 6px; font-weight: 600;";
const SELECT_STYLE: &str = "width: 100%; padding: 6px 8px; border: 1px solid #bbb; border-radius: 6px; background: #fff;";

#[component]
pub fn Sidebar(selection: Selection, on_change: EventHandler<Selection>) -> Element {
    let choose = move |field: SelectorField, value: String| match apply_choice(selection, field, &value) {
        Ok(next) => on_change.call(next),
        Err(e) => tracing::warn!(?field, value, error = %e, "Ignoring invalid selection"),
    };

    rsx! {
        aside {
            style: "width: 220px; flex-shrink: 0; padding: 16px; border-right: 1px solid #e5e7eb; background: #fafafa;",
            h3 { style: "margin-top: 0;", "Filters" }

            label { style: LABEL_STYLE, "Root Crop" }
            select {
                style: SELECT_STYLE,
                onchange: move |evt| choose(SelectorField::Commodity, evt.value()),
                for commodity in Commodity::ALL {
                    option {
                        value: "{commodity}",
                        selected: commodity == selection.commodity,
                        "{commodity}"
                    }
                }
            }

            label { style: LABEL_STYLE, "Year" }
            select {
                style: SELECT_STYLE,
                onchange: move |evt| choose(SelectorField::Year, evt.value()),
                for year in YearFilter::options() {
                    option {
                        value: "{year}",
                        selected: year == selection.year,
                        "{year}"
                    }
                }
            }

            label { style: LABEL_STYLE, "Forecast" }
            select {
                style: SELECT_STYLE,
                onchange: move |evt| choose(SelectorField::Interval, evt.value()),
                for interval in ForecastInterval::ALL {
                    option {
                        value: "{interval.sheet_name()}",
                        selected: interval == selection.interval,
                        "{interval.label()}"
                    }
                }
            }
        }
    }
}
