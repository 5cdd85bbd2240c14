// Application context for the dashboard.
// Built once in main.rs and provided to the component tree through the launch
// context. The current selection itself lives in a signal inside `App`.

use engine::view::{DashboardLayout, DashboardView};
use engine::PriceService;
use shared::models::Selection;

use crate::config::{AppConfig, ChartPalette};

/// What the error banner shows when a selection cannot be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFailure {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub service: PriceService,
    pub layout: DashboardLayout,
    pub palette: ChartPalette,
    pub subtitle: String,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, anyhow::Error> {
        Ok(Self {
            service: PriceService::new(config.engine_settings()?),
            layout: config.layout()?,
            palette: config.chart.clone(),
            subtitle: config.app.subtitle.clone(),
        })
    }

    /// Re-runs the whole pipeline for `selection`.
    pub fn render(&self, selection: &Selection) -> Result<DashboardView, RenderFailure> {
        self.service.render(selection, &self.layout).map_err(|e| RenderFailure {
            title: format!("{}: {}", e.kind().title(), selection.commodity),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::config::EngineSettings;
    use shared::models::{Commodity, ForecastInterval, YearFilter};
    use std::path::PathBuf;

    fn fixture_state() -> AppState {
        let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../engine/tests/data");
        AppState {
            service: PriceService::new(EngineSettings::default().with_data_dir(fixtures)),
            layout: DashboardLayout::wide(),
            palette: ChartPalette::default(),
            subtitle: String::new(),
        }
    }

    #[test]
    fn test_render_fixture_selection() {
        let selection = Selection {
            commodity: Commodity::Carrot,
            year: YearFilter::Year(2022),
            interval: ForecastInterval::Monthly,
        };
        let view = fixture_state().render(&selection).unwrap();
        assert_eq!(view.history_chart.points.len(), 4);
        assert_eq!(view.forecast.table.rows.len(), 3);
    }

    #[test]
    fn test_render_failure_is_titled_by_kind() {
        let selection = Selection { commodity: Commodity::SweetPotato, ..Selection::default() };
        let failure = fixture_state().render(&selection).unwrap_err();
        assert!(failure.title.ends_with("Sweet Potato"), "{}", failure.title);
        assert!(failure.message.contains("Sweet Potato"), "{}", failure.message);
    }
}
