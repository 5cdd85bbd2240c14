// Long-format forecast sheets ("monthly" / "weekly"): a header row naming the
// date and price columns, then one forecast per row.
use chrono::{Duration, NaiveDate, NaiveDateTime};
use shared::models::{PricePoint, PriceSeries};

use super::ensure_increasing;
use crate::config::ForecastSettings;
use crate::data::{Cell, Sheet};
use crate::error::EngineError;
use crate::indicators::annotate;

const TEXT_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];
const TEXT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRules {
    pub date_column: String,
    pub price_column: String,
    /// Dropped before the percentage change is derived.
    pub excluded_dates: Vec<NaiveDate>,
}

impl ForecastRules {
    pub fn for_sheet(settings: &ForecastSettings, sheet: &str) -> Self {
        Self {
            date_column: settings.date_column.clone(),
            price_column: settings.price_column.clone(),
            excluded_dates: settings.excluded_dates(sheet),
        }
    }
}

fn find_column(sheet: &Sheet, name: &str) -> Result<usize, EngineError> {
    (0..sheet.column_count())
        .find(|&col| {
            sheet
                .cell(0, col)
                .as_text()
                .is_some_and(|header| header.trim().eq_ignore_ascii_case(name.trim()))
        })
        .ok_or_else(|| {
            EngineError::LayoutError(format!("sheet '{}' has no '{}' column", sheet.name, name))
        })
}

// Spreadsheet serial dates count days from 1899-12-30.
fn from_serial(serial: f64) -> Option<NaiveDate> {
    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    base.checked_add_signed(Duration::days(serial.trunc() as i64))
}

pub fn date_from_cell(cell: &Cell) -> Result<NaiveDate, EngineError> {
    let parsed = match cell {
        Cell::Date(dt) => Some(dt.date()),
        Cell::Number(serial) => from_serial(*serial),
        Cell::Text(s) => TEXT_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .or_else(|| NaiveDateTime::parse_from_str(s, TEXT_DATETIME_FORMAT).ok().map(|dt| dt.date())),
        _ => None,
    };
    parsed.ok_or_else(|| EngineError::DateParseError {
        input: cell.to_string(),
        expected: format!("a date ({} or {})", TEXT_DATE_FORMATS.join(", "), TEXT_DATETIME_FORMAT),
    })
}

pub fn normalize_forecast(sheet: &Sheet, rules: &ForecastRules) -> Result<PriceSeries, EngineError> {
    let date_col = find_column(sheet, &rules.date_column)?;
    let price_col = find_column(sheet, &rules.price_column)?;

    let mut points = Vec::new();
    let mut excluded = Vec::new();
    for row in 1..sheet.row_count() {
        let date_cell = sheet.cell(row, date_col);
        let price_cell = sheet.cell(row, price_col);
        if date_cell.is_empty() && price_cell.is_empty() {
            continue;
        }

        let date = date_from_cell(date_cell)?;
        let price = price_cell.to_f64().ok_or_else(|| EngineError::ValueCoercionError {
            field: format!("{} (row {})", rules.price_column, row + 1),
            input: price_cell.to_string(),
        })?;

        // Dropped before annotation, so the next kept row compares against its new predecessor.
        if rules.excluded_dates.contains(&date) {
            excluded.push(date);
            continue;
        }
        points.push(PricePoint { date, price });
    }

    for rule_date in rules.excluded_dates.iter().filter(|d| !excluded.contains(d)) {
        tracing::warn!(sheet = %sheet.name, date = %rule_date, "Exclusion rule matched no forecast row");
    }

    ensure_increasing(&points)?;
    tracing::debug!(
        sheet = %sheet.name,
        records = points.len(),
        excluded = excluded.len(),
        "Normalized forecast sheet"
    );
    Ok(annotate(points))
}
