// GUI configuration module
pub mod theme;

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use engine::config::EngineSettings;
use engine::view::DashboardLayout;
use serde::Deserialize;

pub use theme::ChartPalette;

/// Mirrors assets/config/default.json.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub data: DataSettings,
    #[serde(default)]
    pub chart: ChartPalette,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub title: String,
    pub subtitle: String,
    /// "wide" or "compact"
    pub layout: String,
    pub window_width: u32,
    pub window_height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub data_dir: PathBuf,
    pub csv_delimiter: String, // Should be char, but JSON string is easier
    /// Optional engine settings file; its exclusions and column names win over the defaults.
    #[serde(default)]
    pub settings_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn from_json(json: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(json).context("invalid GUI configuration")?;
        Ok(config)
    }

    pub fn engine_settings(&self) -> Result<EngineSettings, anyhow::Error> {
        let mut chars = self.data.csv_delimiter.chars();
        let delimiter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(anyhow!("csv_delimiter must be a single character, got '{}'", self.data.csv_delimiter)),
        };

        let settings = match &self.data.settings_file {
            Some(path) => EngineSettings::load(path)
                .with_context(|| format!("failed to load engine settings from {}", path.display()))?,
            None => EngineSettings::default(),
        };
        let settings = EngineSettings { csv_delimiter: delimiter, ..settings.with_data_dir(&self.data.data_dir) };
        settings.validate()?;
        Ok(settings)
    }

    pub fn layout(&self) -> Result<DashboardLayout, anyhow::Error> {
        let preset: DashboardLayout = self.app.layout.parse()?;
        let layout = DashboardLayout::builder().preset(preset).title(self.app.title.clone()).build()?;
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::view::Arrangement;

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.app.layout, "wide");
        assert_eq!(config.chart, ChartPalette::default_light());

        let settings = config.engine_settings().unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("datasets"));
        assert_eq!(settings.csv_delimiter, ',');
        assert_eq!(settings.forecast.excluded_dates("monthly").len(), 1);

        let layout = config.layout().unwrap();
        assert_eq!(layout.title, "Root Crops Price Dashboard");
        assert_eq!(layout.arrangement, Arrangement::SideBySide);
    }

    #[test]
    fn test_compact_layout_and_delimiter() {
        let json = r#"{
            "version": "1.0.0",
            "app": { "title": "Prices", "subtitle": "", "layout": "compact", "window_width": 800, "window_height": 600 },
            "data": { "data_dir": "/srv/rootcrops", "csv_delimiter": ";" }
        }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.layout().unwrap().arrangement, Arrangement::Stacked);
        assert_eq!(config.engine_settings().unwrap().csv_delimiter, ';');
        assert_eq!(config.chart, ChartPalette::default());
    }

    #[test]
    fn test_invalid_delimiter_and_layout() {
        let json = r#"{
            "version": "1.0.0",
            "app": { "title": "Prices", "subtitle": "", "layout": "huge", "window_width": 800, "window_height": 600 },
            "data": { "data_dir": "datasets", "csv_delimiter": ";;" }
        }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert!(config.layout().is_err());
        assert!(config.engine_settings().is_err());
    }
}
