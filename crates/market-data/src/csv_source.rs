use crate::{select_window, Error, PriceSource, Result};
use chrono::NaiveDate;
use core_types::{PricePoint, Symbol};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The columns we use from a daily price file. Any other columns are ignored.
#[derive(Debug, Deserialize)]
struct PriceRow {
    #[serde(rename = "Date", alias = "date")]
    date: NaiveDate,
    #[serde(rename = "Close", alias = "close", default, deserialize_with = "csv::invalid_option")]
    close: Option<Decimal>,
}

/// Loads `{directory}/{SYMBOL}.csv` files with a header row containing `Date` and `Close`.
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    directory: PathBuf,
}

impl CsvPriceSource {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, symbol: &Symbol) -> PathBuf {
        self.directory.join(format!("{}.csv", symbol.0))
    }

    fn read_rows(path: &Path) -> Result<Vec<PricePoint>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut points = Vec::new();

        for (line, row) in reader.deserialize::<PriceRow>().enumerate() {
            let row = row?;
            match row.close {
                Some(close) => points.push(PricePoint::new(row.date, close)),
                None => tracing::warn!(
                    path = %path.display(),
                    line = line + 2,
                    date = %row.date,
                    "Skipping row without a close price."
                ),
            }
        }
        Ok(points)
    }
}

impl PriceSource for CsvPriceSource {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn load(&self, symbol: &Symbol, start: NaiveDate, end: NaiveDate) -> Result<Vec<PricePoint>> {
        let path = self.path_for(symbol);
        if !path.is_file() {
            return Err(Error::SymbolNotFound {
                symbol: symbol.0.clone(),
                path,
            });
        }

        let points = Self::read_rows(&path)?;
        let total = points.len();
        let window = select_window(points, start, end)?;
        tracing::info!(
            symbol = %symbol,
            path = %path.display(),
            rows = total,
            selected = window.len(),
            "Loaded price history."
        );
        Ok(window)
    }
}
