//! CSV price import: the offline price source.
//!
//! Expects a header row of `date,price` with ISO dates (YYYY-MM-DD). Rows
//! are sorted by date after parsing, so file order does not matter; the
//! provider still hands the engine an oldest-first series.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use super::provider::{DataError, PriceProvider};
use crate::domain::PricePoint;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    price: f64,
}

/// Reads `date,price` rows from a CSV file.
pub struct CsvProvider {
    path: PathBuf,
}

impl CsvProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_points<R: Read>(reader: R) -> Result<Vec<PricePoint>, DataError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut points = Vec::new();

        for row in rdr.deserialize::<CsvRow>() {
            let row = row.map_err(|e| DataError::CsvParse(e.to_string()))?;
            let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
                .map_err(|e| DataError::CsvParse(format!("bad date '{}': {e}", row.date)))?;
            points.push(PricePoint::new(date, row.price));
        }

        points.sort_by_key(|p| p.date);
        Ok(points)
    }
}

impl PriceProvider for CsvProvider {
    fn name(&self) -> &str {
        "csv_import"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, DataError> {
        let file = File::open(&self.path).map_err(|e| DataError::Io(e.to_string()))?;
        let mut points = Self::read_points(file)?;
        points.retain(|p| p.date >= start && p.date <= end);

        if points.is_empty() {
            return Err(DataError::EmptyRange {
                symbol: symbol.to_string(),
            });
        }
        Ok(points)
    }
}
