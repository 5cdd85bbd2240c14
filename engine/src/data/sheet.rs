// In-memory sheet grid, independent of the file format it was read from
use std::fmt;

use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Bool(bool),
    Error(String),
}

impl Cell {
    // Blank strings count as empty, matching what a spreadsheet shows.
    pub fn text(s: &str) -> Cell {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Decimal coercion: numbers as-is, text only when it is a plain number.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Integer coercion: whole numbers or integer text.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Cell::Number(v) if v.is_finite() && v.fract() == 0.0 => Some(*v as i64),
            Cell::Text(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            // Whole numbers print without the trailing ".0" so year labels read "2020".
            Cell::Number(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{}", *v as i64),
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Date(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Error(e) => write!(f, "#{}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    rows: Vec<Vec<Cell>>,
}

static EMPTY: Cell = Cell::Empty;

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { name: name.into(), rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row; ragged rows are padded with empty cells on access.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }
}
