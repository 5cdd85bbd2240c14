// Wide-format historical sheet -> date-indexed price series.
//
// Layout: row 0 carries the year labels (only on the first column of each year,
// the rest blank or "Unnamed: N" in pandas exports), rows 1..=3 carry Month, Day
// and Value. Each column is one observation.
use chrono::NaiveDate;
use shared::models::{PricePoint, PriceSeries};

use super::ensure_increasing;
use super::fill::forward_fill;
use crate::data::{Cell, Sheet};
use crate::error::EngineError;
use crate::indicators::annotate;

pub const DATE_FORMAT: &str = "%Y %B %d";

const YEAR_ROW: usize = 0;
const MONTH_ROW: usize = 1;
const DAY_ROW: usize = 2;
const VALUE_ROW: usize = 3;

/// One sheet column after transposing: the future record plus its raw labels.
#[derive(Debug)]
struct RawPeriod<'a> {
    column: usize,
    year: Option<String>,
    month: Option<String>,
    day: &'a Cell,
    value: &'a Cell,
}

fn year_label(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Empty => None,
        Cell::Text(s) if s.starts_with("Unnamed") => None,
        Cell::Date(dt) => Some(dt.format("%Y").to_string()),
        other => Some(other.to_string()),
    }
}

fn month_label(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Empty => None,
        other => Some(other.to_string()),
    }
}

// Some workbooks keep a leading "Month / Day / Value" caption column.
fn has_label_column(sheet: &Sheet) -> bool {
    sheet
        .cell(MONTH_ROW, 0)
        .as_text()
        .is_some_and(|s| s.eq_ignore_ascii_case("month"))
}

fn transpose(sheet: &Sheet) -> Vec<RawPeriod<'_>> {
    let first_column = if has_label_column(sheet) { 1 } else { 0 };
    (first_column..sheet.column_count())
        .filter(|&col| (YEAR_ROW..=VALUE_ROW).any(|row| !sheet.cell(row, col).is_empty()))
        .map(|col| RawPeriod {
            column: col,
            year: year_label(sheet.cell(YEAR_ROW, col)),
            month: month_label(sheet.cell(MONTH_ROW, col)),
            day: sheet.cell(DAY_ROW, col),
            value: sheet.cell(VALUE_ROW, col),
        })
        .collect()
}

pub fn normalize_history(sheet: &Sheet) -> Result<PriceSeries, EngineError> {
    if sheet.row_count() <= VALUE_ROW {
        return Err(EngineError::LayoutError(format!(
            "sheet '{}' has {} rows, expected a year row followed by Month, Day and Value rows",
            sheet.name,
            sheet.row_count()
        )));
    }

    let periods = transpose(sheet);
    if periods.is_empty() {
        return Err(EngineError::LayoutError(format!("sheet '{}' has no period columns", sheet.name)));
    }

    let years = forward_fill(&periods.iter().map(|p| p.year.clone()).collect::<Vec<_>>());
    let months = forward_fill(&periods.iter().map(|p| p.month.clone()).collect::<Vec<_>>());

    let mut points = Vec::with_capacity(periods.len());
    for ((period, year), month) in periods.iter().zip(years).zip(months) {
        let column = period.column + 1;
        let year = year.ok_or_else(|| {
            EngineError::LayoutError(format!("column {} has no year label to inherit", column))
        })?;
        let month = month.ok_or_else(|| {
            EngineError::LayoutError(format!("column {} has no month label to inherit", column))
        })?;
        let day = period.day.to_i64().ok_or_else(|| EngineError::ValueCoercionError {
            field: format!("Day (column {})", column),
            input: period.day.to_string(),
        })?;

        let composite = format!("{} {} {}", year, month, day);
        let date = NaiveDate::parse_from_str(&composite, DATE_FORMAT)
            .ok()
            // chrono's %B also takes "Jan"; only full month names are valid labels.
            .filter(|d| month.trim().eq_ignore_ascii_case(&d.format("%B").to_string()))
            .ok_or_else(|| EngineError::DateParseError {
                input: composite.clone(),
                expected: DATE_FORMAT.to_string(),
            })?;
        let price = period.value.to_f64().ok_or_else(|| EngineError::ValueCoercionError {
            field: format!("Value (column {})", column),
            input: period.value.to_string(),
        })?;

        points.push(PricePoint { date, price });
    }

    ensure_increasing(&points)?;
    tracing::debug!(sheet = %sheet.name, records = points.len(), "Normalized historical sheet");
    Ok(annotate(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Direction;

    fn t(s: &str) -> Cell {
        Cell::text(s)
    }

    fn n(v: f64) -> Cell {
        Cell::Number(v)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_two_day_example() {
        let sheet = Sheet::new(
            "Carrot",
            vec![
                vec![n(2020.0), Cell::Empty],
                vec![t("January"), Cell::Empty],
                vec![n(1.0), n(2.0)],
                vec![n(30.0), n(33.0)],
            ],
        );
        let series = normalize_history(&sheet).unwrap();
        let records = series.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, date(2020, 1, 1));
        assert_eq!(records[0].price, 30.0);
        assert_eq!(records[0].change.to_string(), "0.00%");
        assert_eq!(records[1].date, date(2020, 1, 2));
        assert_eq!(records[1].price, 33.0);
        assert_eq!(records[1].change.to_string(), "10.00% ↑");
    }

    #[test]
    fn test_forward_fill_across_year_and_month_boundaries() {
        let sheet = Sheet::new(
            "Potato",
            vec![
                vec![n(2019.0), t("Unnamed: 1"), Cell::Empty, n(2020.0), Cell::Empty],
                vec![t("December"), Cell::Empty, Cell::Empty, t("January"), t("February")],
                vec![n(16.0), n(23.0), n(30.0), n(6.0), n(3.0)],
                vec![n(80.0), n(88.0), n(84.0), n(84.0), t("90.5")],
            ],
        );
        let series = normalize_history(&sheet).unwrap();
        let dates: Vec<_> = series.records().iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date(2019, 12, 16), date(2019, 12, 23), date(2019, 12, 30), date(2020, 1, 6), date(2020, 2, 3)]
        );
        let directions: Vec<_> = series.records().iter().map(|r| r.change.direction()).collect();
        assert_eq!(
            directions,
            vec![Direction::Flat, Direction::Up, Direction::Down, Direction::Flat, Direction::Up]
        );
        assert_eq!(series.records()[4].price, 90.5);
    }

    #[test]
    fn test_label_column_is_skipped() {
        let sheet = Sheet::new(
            "Gabi",
            vec![
                vec![Cell::Empty, t("2015")],
                vec![t("Month"), t("March")],
                vec![t("Day"), t("9")],
                vec![t("Value"), n(55.25)],
            ],
        );
        let series = normalize_history(&sheet).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.records()[0].date, date(2015, 3, 9));
    }

    #[test]
    fn test_trailing_empty_columns_ignored() {
        let sheet = Sheet::new(
            "Cassava",
            vec![
                vec![n(2021.0), Cell::Empty, Cell::Empty],
                vec![t("May"), Cell::Empty, Cell::Empty],
                vec![n(3.0), Cell::Empty, Cell::Empty],
                vec![n(40.0), Cell::Empty, Cell::Empty],
            ],
        );
        assert_eq!(normalize_history(&sheet).unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_month_is_parse_error() {
        let sheet = Sheet::new(
            "Carrot",
            vec![
                vec![n(2020.0), Cell::Empty],
                vec![t("January"), t("Frebruary")],
                vec![n(1.0), n(30.0)],
                vec![n(30.0), n(33.0)],
            ],
        );
        let err = normalize_history(&sheet).unwrap_err();
        match err {
            EngineError::DateParseError { input, .. } => assert_eq!(input, "2020 Frebruary 30"),
            other => panic!("expected DateParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_impossible_day_is_parse_error() {
        let sheet = Sheet::new(
            "Carrot",
            vec![vec![n(2021.0)], vec![t("February")], vec![n(30.0)], vec![n(30.0)]],
        );
        assert!(matches!(normalize_history(&sheet), Err(EngineError::DateParseError { .. })));
    }

    fn one_day(month: &str) -> Sheet {
        Sheet::new("Carrot", vec![vec![n(2020.0)], vec![t(month)], vec![n(1.0)], vec![n(30.0)]])
    }

    #[test]
    fn test_abbreviated_month_is_parse_error() {
        for month in ["Jan", "jan", "Sept"] {
            match normalize_history(&one_day(month)) {
                Err(EngineError::DateParseError { input, .. }) => assert_eq!(input, format!("2020 {} 1", month)),
                other => panic!("expected DateParseError for {month:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_month_name_is_case_insensitive() {
        for month in ["JANUARY", "january", "January"] {
            let series = normalize_history(&one_day(month)).unwrap();
            assert_eq!(series.records()[0].date, date(2020, 1, 1));
        }
    }

    #[test]
    fn test_non_numeric_value_is_coercion_error() {
        let sheet = Sheet::new(
            "Carrot",
            vec![
                vec![n(2020.0), Cell::Empty],
                vec![t("January"), Cell::Empty],
                vec![n(1.0), n(2.0)],
                vec![n(30.0), t("n.a.")],
            ],
        );
        let err = normalize_history(&sheet).unwrap_err();
        assert!(matches!(err, EngineError::ValueCoercionError { ref input, .. } if input == "n.a."));
    }

    #[test]
    fn test_missing_value_is_coercion_error() {
        let sheet = Sheet::new(
            "Carrot",
            vec![
                vec![n(2020.0), Cell::Empty],
                vec![t("January"), Cell::Empty],
                vec![n(1.0), n(2.0)],
                vec![n(30.0)],
            ],
        );
        assert!(matches!(normalize_history(&sheet), Err(EngineError::ValueCoercionError { .. })));
    }

    #[test]
    fn test_fractional_day_is_coercion_error() {
        let sheet = Sheet::new("Carrot", vec![vec![n(2020.0)], vec![t("January")], vec![n(1.5)], vec![n(30.0)]]);
        assert!(matches!(normalize_history(&sheet), Err(EngineError::ValueCoercionError { .. })));
    }

    #[test]
    fn test_leading_missing_year_is_layout_error() {
        let sheet = Sheet::new(
            "Carrot",
            vec![vec![Cell::Empty, n(2020.0)], vec![t("January"), t("January")], vec![n(1.0), n(2.0)], vec![n(30.0), n(31.0)]],
        );
        assert!(matches!(normalize_history(&sheet), Err(EngineError::LayoutError(_))));
    }

    #[test]
    fn test_duplicate_date_is_ordering_error() {
        let sheet = Sheet::new(
            "Carrot",
            vec![
                vec![n(2020.0), Cell::Empty],
                vec![t("January"), Cell::Empty],
                vec![n(1.0), n(1.0)],
                vec![n(30.0), n(31.0)],
            ],
        );
        assert!(matches!(normalize_history(&sheet), Err(EngineError::OrderingError { .. })));
    }

    #[test]
    fn test_too_few_rows() {
        let sheet = Sheet::new("Carrot", vec![vec![n(2020.0)], vec![t("January")]]);
        assert!(matches!(normalize_history(&sheet), Err(EngineError::LayoutError(_))));
    }

    #[test]
    fn test_output_is_strictly_increasing() {
        let months = ["January", "February", "March", "April", "May", "June"];
        let mut years = Vec::new();
        let mut month_row = Vec::new();
        let mut day_row = Vec::new();
        let mut value_row = Vec::new();
        for (y, year) in [2018.0, 2019.0].iter().enumerate() {
            for (m, month) in months.iter().enumerate() {
                for (d, day) in [1.0, 15.0].iter().enumerate() {
                    years.push(if m == 0 && d == 0 { n(*year) } else { Cell::Empty });
                    month_row.push(if d == 0 { t(month) } else { Cell::Empty });
                    day_row.push(n(*day));
                    value_row.push(n(20.0 + (y * 12 + m * 2 + d) as f64));
                }
            }
        }
        let sheet = Sheet::new("Sweet Potato", vec![years, month_row, day_row, value_row]);
        let series = normalize_history(&sheet).unwrap();
        assert_eq!(series.len(), 24);
        assert!(series.records().windows(2).all(|w| w[0].date < w[1].date));
    }
}
