use chrono::NaiveDate;
use shared::models::{PriceRecord, PriceSeries, YearFilter};
use shared::utils::date_format::iso_date;
use shared::utils::peso_format::format_peso;

use super::Tone;

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub day: NaiveDate,
    pub date: String,
    pub price: String,
    pub change: String,
    pub tone: Tone,
}

impl From<&PriceRecord> for TableRow {
    fn from(record: &PriceRecord) -> Self {
        TableRow {
            day: record.date,
            date: iso_date(record.date),
            price: format_peso(record.price),
            change: record.change.to_string(),
            tone: record.change.direction().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    pub date_header: String,
    pub price_header: String,
    pub change_header: String,
    pub rows: Vec<TableRow>,
}

impl PriceTable {
    fn new(price_header: &str, series: &PriceSeries) -> Self {
        PriceTable {
            date_header: "Date".to_string(),
            price_header: price_header.to_string(),
            change_header: "Percentage Change".to_string(),
            rows: series.records().iter().map(TableRow::from).collect(),
        }
    }

    /// Same headers, only the rows whose date passes `filter`.
    pub fn filtered(&self, filter: YearFilter) -> PriceTable {
        PriceTable {
            rows: self.rows.iter().filter(|row| filter.matches(row.day)).cloned().collect(),
            ..self.clone()
        }
    }
}

/// The historical table always lists the whole series; the year filter only applies to the chart.
pub fn history_table(series: &PriceSeries) -> PriceTable {
    PriceTable::new("Price (per kg)", series)
}

pub fn forecast_table(series: &PriceSeries, price_header: &str) -> PriceTable {
    PriceTable::new(price_header, series)
}
