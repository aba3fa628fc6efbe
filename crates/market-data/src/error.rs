// In crates/market-data/src/error.rs

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No price data for symbol '{symbol}' (looked for {path})")]
    SymbolNotFound { symbol: String, path: PathBuf },

    #[error("Failed to read price file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse price file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Price data contains more than one row for {date}")]
    DuplicateDate { date: NaiveDate },

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

pub type Result<T> = std::result::Result<T, Error>;
