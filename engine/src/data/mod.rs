// Spreadsheet sources: the sheet grid, its readers and the commodity catalog
pub mod csv_parser;
pub mod sheet;
pub mod workbook;
pub mod xlsx_reader;

pub use sheet::{Cell, Sheet};
pub use workbook::{DataCatalog, Workbook};
