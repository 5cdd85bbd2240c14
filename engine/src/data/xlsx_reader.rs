use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use chrono::{NaiveDate, NaiveDateTime};

use super::sheet::{Cell, Sheet};
use super::workbook::Workbook;
use crate::error::EngineError;

pub fn cell_from_data(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::String(v) => Cell::text(v),
        Data::Float(v) => Cell::Number(*v),
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Bool(v) => Cell::Bool(*v),
        Data::DateTime(v) => match v.as_datetime() {
            Some(dt) => Cell::Date(dt),
            None => Cell::Number(v.as_f64()),
        },
        Data::DateTimeIso(v) => parse_iso(v).map(Cell::Date).unwrap_or_else(|| Cell::text(v)),
        Data::DurationIso(v) => Cell::text(v),
        Data::Error(v) => Cell::Error(format!("{v:?}")),
    }
}

fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Excel/ODS workbook opened through calamine.
pub struct XlsxWorkbook {
    path: PathBuf,
    inner: Sheets<BufReader<File>>,
}

impl XlsxWorkbook {
    pub fn open(path: &Path) -> Result<Self, EngineError> {
        if !path.exists() {
            return Err(EngineError::MissingFile { path: path.to_path_buf() });
        }
        let inner = open_workbook_auto(path)?;
        Ok(Self { path: path.to_path_buf(), inner })
    }

    fn read(&mut self, name: &str) -> Result<Sheet, EngineError> {
        let range = self.inner.worksheet_range(name)?;
        let rows: Vec<Vec<Cell>> = range.rows().map(|r| r.iter().map(cell_from_data).collect()).collect();
        tracing::debug!(
            path = %self.path.display(),
            sheet = name,
            rows = rows.len(),
            "Read worksheet"
        );
        Ok(Sheet::new(name, rows))
    }
}

impl Workbook for XlsxWorkbook {
    fn path(&self) -> &Path {
        &self.path
    }

    fn default_sheet(&mut self) -> Result<Sheet, EngineError> {
        let first = self.inner.sheet_names().first().cloned().ok_or_else(|| EngineError::MissingSheet {
            path: self.path.clone(),
            sheet: "<first sheet>".to_string(),
        })?;
        self.read(&first)
    }

    fn sheet(&mut self, name: &str) -> Result<Sheet, EngineError> {
        if !self.inner.sheet_names().iter().any(|s| s == name) {
            return Err(EngineError::MissingSheet { path: self.path.clone(), sheet: name.to_string() });
        }
        self.read(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_cell_from_data_scalars() {
        assert_eq!(cell_from_data(&Data::Empty), Cell::Empty);
        assert_eq!(cell_from_data(&Data::String("  ".to_string())), Cell::Empty);
        assert_eq!(cell_from_data(&Data::String(" January".to_string())), Cell::Text("January".to_string()));
        assert_eq!(cell_from_data(&Data::Float(30.5)), Cell::Number(30.5));
        assert_eq!(cell_from_data(&Data::Int(2020)), Cell::Number(2020.0));
        assert_eq!(cell_from_data(&Data::Bool(true)), Cell::Bool(true));
        assert!(matches!(cell_from_data(&Data::Error(CellErrorType::Div0)), Cell::Error(_)));
    }

    #[test]
    fn test_cell_from_iso_datetime() {
        let expected = NaiveDate::from_ymd_opt(2023, 8, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(cell_from_data(&Data::DateTimeIso("2023-08-01T00:00:00".to_string())), Cell::Date(expected));
        assert_eq!(cell_from_data(&Data::DateTimeIso("2023-08-01".to_string())), Cell::Date(expected));
        assert_eq!(
            cell_from_data(&Data::DateTimeIso("sometime".to_string())),
            Cell::Text("sometime".to_string())
        );
    }

    #[test]
    fn test_open_missing_workbook() {
        let result = XlsxWorkbook::open(Path::new("no/such/Carrot.xlsx"));
        assert!(matches!(result, Err(EngineError::MissingFile { .. })));
    }
}
