// Engine settings, loaded from a JSON file or falling back to defaults
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::EngineError;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    /// Directory holding one workbook per commodity.
    pub data_dir: PathBuf,
    pub csv_delimiter: char,
    pub forecast: ForecastSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ForecastSettings {
    pub date_column: String,
    pub price_column: String,
    pub exclusions: Vec<ExclusionRule>,
}

/// A known bad record in a forecast sheet, dropped before any derivation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ExclusionRule {
    pub sheet: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            data_dir: PathBuf::from("datasets"),
            csv_delimiter: ',',
            forecast: ForecastSettings::default(),
        }
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        let exclusion = |sheet: &str, y, m, d| ExclusionRule {
            sheet: sheet.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            reason: Some("known bad record in the published forecast".to_string()),
        };
        ForecastSettings {
            date_column: "Date".to_string(),
            price_column: "Price(per kg)".to_string(),
            exclusions: vec![exclusion("monthly", 2023, 7, 1), exclusion("weekly", 2023, 7, 25)],
        }
    }
}

impl ForecastSettings {
    pub fn excluded_dates(&self, sheet: &str) -> Vec<NaiveDate> {
        self.exclusions
            .iter()
            .filter(|rule| rule.sheet.eq_ignore_ascii_case(sheet))
            .map(|rule| rule.date)
            .collect()
    }
}

impl EngineSettings {
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("cannot read settings file {}: {}", path.display(), e))
        })?;
        let settings: EngineSettings = serde_json::from_str(&raw)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), data_dir = %settings.data_dir.display(), "Loaded engine settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.forecast.date_column.trim().is_empty() || self.forecast.price_column.trim().is_empty() {
            return Err(EngineError::ConfigError(
                "forecast date_column and price_column must not be empty".to_string(),
            ));
        }
        if !self.csv_delimiter.is_ascii() {
            return Err(EngineError::ConfigError(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            )));
        }
        Ok(())
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
