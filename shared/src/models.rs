use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::peso_format;

// First and last year offered by the year selector.
pub const FIRST_YEAR: i32 = 2012;
pub const LAST_YEAR: i32 = 2023;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("Unknown commodity: '{0}'")]
    UnknownCommodity(String),

    #[error("Invalid year '{0}': expected 'All' or a year between {FIRST_YEAR} and {LAST_YEAR}")]
    InvalidYear(String),

    #[error("Unknown forecasting interval: '{0}'")]
    UnknownInterval(String),

    #[error("Invalid percentage change: '{0}'")]
    InvalidPercent(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Commodity {
    #[default]
    Carrot,
    Cassava,
    Gabi,
    Potato,
    SweetPotato,
}

impl Commodity {
    pub const ALL: [Commodity; 5] = [
        Commodity::Carrot,
        Commodity::Cassava,
        Commodity::Gabi,
        Commodity::Potato,
        Commodity::SweetPotato,
    ];

    /// Display name, also used as the workbook file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Commodity::Carrot => "Carrot",
            Commodity::Cassava => "Cassava",
            Commodity::Gabi => "Gabi",
            Commodity::Potato => "Potato",
            Commodity::SweetPotato => "Sweet Potato",
        }
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Commodity {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Commodity::ALL
            .iter()
            .copied()
            .find(|c| {
                c.name().eq_ignore_ascii_case(wanted)
                    || c.name().replace(' ', "").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| SelectionError::UnknownCommodity(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    /// Every choice the year selector offers, "All" first.
    pub fn options() -> Vec<YearFilter> {
        std::iter::once(YearFilter::All)
            .chain((FIRST_YEAR..=LAST_YEAR).map(YearFilter::Year))
            .collect()
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(year) => date.year() == *year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str("All"),
            YearFilter::Year(year) => write!(f, "{}", year),
        }
    }
}

impl FromStr for YearFilter {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(YearFilter::All);
        }
        match trimmed.parse::<i32>() {
            Ok(year) if (FIRST_YEAR..=LAST_YEAR).contains(&year) => Ok(YearFilter::Year(year)),
            _ => Err(SelectionError::InvalidYear(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ForecastInterval {
    #[default]
    Monthly,
    Weekly,
}

impl ForecastInterval {
    pub const ALL: [ForecastInterval; 2] = [ForecastInterval::Monthly, ForecastInterval::Weekly];

    pub fn label(&self) -> &'static str {
        match self {
            ForecastInterval::Monthly => "Monthly (12 months)",
            ForecastInterval::Weekly => "Weekly (10 weeks)",
        }
    }

    /// Name of the workbook sub-sheet holding this forecast.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            ForecastInterval::Monthly => "monthly",
            ForecastInterval::Weekly => "weekly",
        }
    }

    /// Number of forecast periods the sheet is expected to cover.
    pub fn horizon(&self) -> usize {
        match self {
            ForecastInterval::Monthly => 12,
            ForecastInterval::Weekly => 10,
        }
    }
}

impl fmt::Display for ForecastInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ForecastInterval {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ForecastInterval::ALL
            .iter()
            .copied()
            .find(|i| i.label() == trimmed || i.sheet_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SelectionError::UnknownInterval(s.to_string()))
    }
}

/// What the user picked in the sidebar. Nothing here outlives a render pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    pub commodity: Commodity,
    pub year: YearFilter,
    pub interval: ForecastInterval,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn glyph(&self) -> Option<char> {
        match self {
            Direction::Up => Some('↑'),
            Direction::Down => Some('↓'),
            Direction::Flat => None,
        }
    }
}

/// Period-over-period change. `None` means the previous price was zero and the
/// ratio has no finite value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PercentChange {
    ratio: Option<f64>,
}

impl PercentChange {
    pub const ZERO: PercentChange = PercentChange { ratio: Some(0.0) };

    pub fn from_ratio(ratio: f64) -> Self {
        Self { ratio: Some(ratio) }
    }

    pub fn undefined() -> Self {
        Self { ratio: None }
    }

    pub fn between(previous: f64, current: f64) -> Self {
        if previous == 0.0 {
            if current == 0.0 {
                Self::ZERO
            } else {
                Self::undefined()
            }
        } else {
            Self::from_ratio((current - previous) / previous)
        }
    }

    pub fn ratio(&self) -> Option<f64> {
        self.ratio
    }

    pub fn direction(&self) -> Direction {
        match self.ratio {
            Some(r) if r > 0.0 => Direction::Up,
            Some(r) if r < 0.0 => Direction::Down,
            _ => Direction::Flat,
        }
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ratio {
            Some(ratio) => {
                f.write_str(&peso_format::format_percent(ratio))?;
                if let Some(glyph) = self.direction().glyph() {
                    write!(f, " {}", glyph)?;
                }
                Ok(())
            }
            None => f.write_str("n/a"),
        }
    }
}

impl FromStr for PercentChange {
    type Err = SelectionError;

    // Accepts the Display output: "10.00% ↑", "-5.25% ↓", "0.00%" or "n/a".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("n/a") {
            return Ok(Self::undefined());
        }
        peso_format::parse_percent(s)
            .map(Self::from_ratio)
            .ok_or_else(|| SelectionError::InvalidPercent(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub price: f64,
    pub change: PercentChange,
}

/// Date-keyed price records, dates strictly increasing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    /// Callers are responsible for the ordering; the engine normalizer checks it.
    pub fn from_records(records: Vec<PriceRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn lowest(&self) -> Option<f64> {
        self.records.iter().map(|r| r.price).reduce(f64::min)
    }

    pub fn highest(&self) -> Option<f64> {
        self.records.iter().map(|r| r.price).reduce(f64::max)
    }

    /// Records matching the filter, in order. Each record keeps the change
    /// computed against its neighbour in the full series.
    pub fn select(&self, filter: YearFilter) -> Vec<&PriceRecord> {
        self.records.iter().filter(|r| filter.matches(r.date)).collect()
    }
}
