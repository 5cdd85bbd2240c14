// Workbook abstraction and the per-commodity file catalog
use std::path::{Path, PathBuf};

use shared::models::Commodity;

use super::csv_parser::CsvWorkbook;
use super::sheet::Sheet;
use super::xlsx_reader::XlsxWorkbook;
use crate::error::EngineError;

/// A commodity workbook: one default historical sheet plus named sub-sheets.
pub trait Workbook {
    fn path(&self) -> &Path;
    fn default_sheet(&mut self) -> Result<Sheet, EngineError>;
    fn sheet(&mut self, name: &str) -> Result<Sheet, EngineError>;
}

// Spreadsheet formats are preferred over CSV exports when both are present.
const SPREADSHEET_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

#[derive(Debug, Clone, PartialEq)]
pub struct DataCatalog {
    root: PathBuf,
    csv_delimiter: u8,
}

impl DataCatalog {
    pub fn new(root: impl Into<PathBuf>, csv_delimiter: u8) -> Self {
        Self { root: root.into(), csv_delimiter }
    }

    pub fn workbook_path(&self, commodity: Commodity) -> Result<PathBuf, EngineError> {
        let stem = commodity.name();
        SPREADSHEET_EXTENSIONS
            .iter()
            .chain(std::iter::once(&"csv"))
            .map(|ext| self.root.join(format!("{}.{}", stem, ext)))
            .find(|p| p.is_file())
            .ok_or_else(|| EngineError::MissingFile { path: self.root.join(format!("{}.xlsx", stem)) })
    }

    /// Opens the commodity's workbook fresh; nothing is kept between calls.
    pub fn open(&self, commodity: Commodity) -> Result<Box<dyn Workbook>, EngineError> {
        let path = self.workbook_path(commodity)?;
        let is_csv = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        tracing::debug!(commodity = %commodity, path = %path.display(), "Opening workbook");
        if is_csv {
            Ok(Box::new(CsvWorkbook::open(&path, self.csv_delimiter)?))
        } else {
            Ok(Box::new(XlsxWorkbook::open(&path)?))
        }
    }
}
