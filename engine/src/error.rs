use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration file error: {source}")]
    ConfigFileError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Data file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Sheet '{sheet}' not found in {}", path.display())]
    MissingSheet { path: PathBuf, sheet: String },

    #[error("Workbook error: {source}")]
    WorkbookError {
        #[from]
        source: calamine::Error,
    },

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Sheet layout error: {0}")]
    LayoutError(String),

    #[error("Date parse error: '{input}' does not match {expected}")]
    DateParseError { input: String, expected: String },

    #[error("Value coercion error: {field} '{input}' is not a number")]
    ValueCoercionError { field: String, input: String },

    #[error("Ordering error: {current} does not come after {previous}")]
    OrderingError { previous: NaiveDate, current: NaiveDate },
}

/// Coarse failure category, used to title the message shown for a failed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Load,
    Parse,
    Type,
    Config,
}

impl FailureKind {
    pub fn title(&self) -> &'static str {
        match self {
            FailureKind::Load => "Could not load data",
            FailureKind::Parse => "Could not read dates",
            FailureKind::Type => "Could not read prices",
            FailureKind::Config => "Invalid configuration",
        }
    }
}

impl EngineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            EngineError::ConfigError(_) | EngineError::ConfigFileError { .. } => FailureKind::Config,
            EngineError::MissingFile { .. }
            | EngineError::MissingSheet { .. }
            | EngineError::WorkbookError { .. }
            | EngineError::CsvSystemError { .. }
            | EngineError::IoError { .. } => FailureKind::Load,
            EngineError::LayoutError(_)
            | EngineError::DateParseError { .. }
            | EngineError::OrderingError { .. } => FailureKind::Parse,
            EngineError::ValueCoercionError { .. } => FailureKind::Type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let missing = EngineError::MissingFile { path: PathBuf::from("datasets/Carrot.xlsx") };
        assert_eq!(missing.kind(), FailureKind::Load);
        assert!(missing.to_string().contains("datasets/Carrot.xlsx"));

        let parse = EngineError::DateParseError {
            input: "2020 Frebruary 30".to_string(),
            expected: "%Y %B %d".to_string(),
        };
        assert_eq!(parse.kind(), FailureKind::Parse);
        assert!(parse.to_string().contains("2020 Frebruary 30"));

        let coercion = EngineError::ValueCoercionError { field: "Value".to_string(), input: "n.a.".to_string() };
        assert_eq!(coercion.kind(), FailureKind::Type);
        assert_eq!(coercion.kind().title(), "Could not read prices");
    }
}
