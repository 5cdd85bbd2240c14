// CSV exports of the commodity workbooks: `<stem>.csv` holds the default sheet and
// `<stem>.<sheet>.csv` each named sub-sheet (e.g. `Carrot.monthly.csv`).
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use super::sheet::{Cell, Sheet};
use super::workbook::Workbook;
use crate::error::EngineError;

pub fn cell_from_field(field: &str) -> Cell {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        Cell::Empty
    } else if let Ok(v) = trimmed.parse::<f64>() {
        Cell::Number(v)
    } else {
        Cell::Text(trimmed.to_string())
    }
}

pub fn read_sheet(path: &Path, name: &str, delimiter: u8) -> Result<Sheet, EngineError> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false) // The header row is data here; the normalizers interpret it.
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(cell_from_field).collect());
    }
    tracing::debug!(path = %path.display(), sheet = name, rows = rows.len(), "Read CSV sheet");
    Ok(Sheet::new(name, rows))
}

pub struct CsvWorkbook {
    path: PathBuf,
    delimiter: u8,
}

impl CsvWorkbook {
    pub fn open(path: &Path, delimiter: u8) -> Result<Self, EngineError> {
        if !path.is_file() {
            return Err(EngineError::MissingFile { path: path.to_path_buf() });
        }
        Ok(Self { path: path.to_path_buf(), delimiter })
    }

    pub fn sheet_path(&self, name: &str) -> PathBuf {
        let stem = self.path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        self.path.with_file_name(format!("{}.{}.csv", stem, name))
    }
}

impl Workbook for CsvWorkbook {
    fn path(&self) -> &Path {
        &self.path
    }

    fn default_sheet(&mut self) -> Result<Sheet, EngineError> {
        let name = self.path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        read_sheet(&self.path, &name, self.delimiter)
    }

    fn sheet(&mut self, name: &str) -> Result<Sheet, EngineError> {
        let sheet_path = self.sheet_path(name);
        if !sheet_path.is_file() {
            return Err(EngineError::MissingSheet { path: self.path.clone(), sheet: name.to_string() });
        }
        read_sheet(&sheet_path, name, self.delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_cell_from_field() {
        assert_eq!(cell_from_field(""), Cell::Empty);
        assert_eq!(cell_from_field("  "), Cell::Empty);
        assert_eq!(cell_from_field("2020"), Cell::Number(2020.0));
        assert_eq!(cell_from_field(" 33.5 "), Cell::Number(33.5));
        assert_eq!(cell_from_field("January"), Cell::Text("January".to_string()));
        assert_eq!(cell_from_field("Unnamed: 2"), Cell::Text("Unnamed: 2".to_string()));
    }

    #[test]
    fn test_read_default_and_named_sheets() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("Gabi.csv");
        fs::write(&base, "2020,,\nJanuary,,February\n1,2,1\n30,33,31\n").unwrap();
        fs::write(dir.path().join("Gabi.monthly.csv"), "Date,Price(per kg)\n2023-08-01,40.5\n").unwrap();

        let mut wb = CsvWorkbook::open(&base, b',').unwrap();
        let sheet = wb.default_sheet().unwrap();
        assert_eq!(sheet.name, "Gabi");
        assert_eq!(sheet.row_count(), 4);
        assert_eq!(sheet.cell(0, 0), &Cell::Number(2020.0));
        assert_eq!(sheet.cell(0, 1), &Cell::Empty);
        assert_eq!(sheet.cell(1, 2), &Cell::Text("February".to_string()));

        let monthly = wb.sheet("monthly").unwrap();
        assert_eq!(monthly.name, "monthly");
        assert_eq!(monthly.cell(0, 1), &Cell::Text("Price(per kg)".to_string()));
        assert_eq!(monthly.cell(1, 1), &Cell::Number(40.5));
    }

    #[test]
    fn test_missing_sheet_and_file() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("Potato.csv");
        fs::write(&base, "2020\nJanuary\n1\n30\n").unwrap();

        let mut wb = CsvWorkbook::open(&base, b',').unwrap();
        let err = wb.sheet("weekly").unwrap_err();
        assert!(matches!(err, EngineError::MissingSheet { ref sheet, .. } if sheet == "weekly"));

        let missing = CsvWorkbook::open(&dir.path().join("Cassava.csv"), b',');
        assert!(matches!(missing, Err(EngineError::MissingFile { .. })));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("Carrot.csv");
        fs::write(&base, "2020;\nJanuary;\n1;2\n30;33\n").unwrap();
        let mut wb = CsvWorkbook::open(&base, b';').unwrap();
        let sheet = wb.default_sheet().unwrap();
        assert_eq!(sheet.cell(3, 1), &Cell::Number(33.0));
    }
}
