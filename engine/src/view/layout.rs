// Presentation configuration. Both dashboard variants share one pipeline and
// differ only in the layout they pass to it.
use std::str::FromStr;

use crate::error::EngineError;

pub const DEFAULT_TITLE: &str =
    "Historical Data for Selected Root Crops in National Capital Region (NCR), Philippines";
pub const FORECAST_TITLE: &str = "Forecasted Value";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Table and chart in two columns.
    SideBySide,
    /// Table above chart.
    Stacked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub title: String,
    pub forecast_title: String,
    pub arrangement: Arrangement,
    pub chart_width: u32,
    pub chart_height: u32,
    pub table_height: u32,
    pub show_gauges: bool,
}

impl DashboardLayout {
    pub fn builder() -> DashboardLayoutBuilder {
        DashboardLayoutBuilder::default()
    }

    pub fn wide() -> Self {
        DashboardLayout {
            title: DEFAULT_TITLE.to_string(),
            forecast_title: FORECAST_TITLE.to_string(),
            arrangement: Arrangement::SideBySide,
            chart_width: 400,
            chart_height: 550,
            table_height: 520,
            show_gauges: true,
        }
    }

    pub fn compact() -> Self {
        DashboardLayout {
            arrangement: Arrangement::Stacked,
            chart_width: 720,
            chart_height: 360,
            table_height: 320,
            ..Self::wide()
        }
    }
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self::wide()
    }
}

impl FromStr for DashboardLayout {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wide" => Ok(Self::wide()),
            "compact" => Ok(Self::compact()),
            other => Err(EngineError::ConfigError(format!(
                "unknown layout preset '{}', expected 'wide' or 'compact'",
                other
            ))),
        }
    }
}

/// Starts from a preset (wide by default) and overrides individual fields.
#[derive(Debug, Clone, Default)]
pub struct DashboardLayoutBuilder {
    base: Option<DashboardLayout>,
    title: Option<String>,
    chart_size: Option<(u32, u32)>,
    table_height: Option<u32>,
    show_gauges: Option<bool>,
}

impl DashboardLayoutBuilder {
    pub fn preset(mut self, layout: DashboardLayout) -> Self {
        self.base = Some(layout);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn chart_size(mut self, width: u32, height: u32) -> Self {
        self.chart_size = Some((width, height));
        self
    }

    pub fn table_height(mut self, height: u32) -> Self {
        self.table_height = Some(height);
        self
    }

    pub fn show_gauges(mut self, show: bool) -> Self {
        self.show_gauges = Some(show);
        self
    }

    pub fn build(self) -> Result<DashboardLayout, EngineError> {
        let mut layout = self.base.unwrap_or_default();
        if let Some(title) = self.title {
            layout.title = title;
        }
        if let Some((width, height)) = self.chart_size {
            layout.chart_width = width;
            layout.chart_height = height;
        }
        if let Some(height) = self.table_height {
            layout.table_height = height;
        }
        if let Some(show) = self.show_gauges {
            layout.show_gauges = show;
        }

        if layout.chart_width == 0 || layout.chart_height == 0 || layout.table_height == 0 {
            return Err(EngineError::ConfigError("layout dimensions must be non-zero".to_string()));
        }
        Ok(layout)
    }
}
