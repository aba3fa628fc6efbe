// In crates/market-data/src/lib.rs

use chrono::NaiveDate;
use core_types::{PricePoint, Symbol};

pub mod csv_source;
pub mod error;
pub mod memory;

// Re-export the most important types for easy access.
pub use csv_source::CsvPriceSource;
pub use error::{Error, Result};
pub use memory::InMemoryPriceSource;

/// The interface for anything that can supply a daily closing-price series.
///
/// Implementations return the points inside the inclusive `[start, end]`
/// window, ordered by strictly increasing date.
pub trait PriceSource: Send + Sync {
    /// A short description of where the data comes from, for logging.
    fn name(&self) -> &'static str;

    fn load(&self, symbol: &Symbol, start: NaiveDate, end: NaiveDate) -> Result<Vec<PricePoint>>;
}

/// Sorts `points`, rejects duplicate dates and keeps only the inclusive `[start, end]` window.
pub fn select_window(mut points: Vec<PricePoint>, start: NaiveDate, end: NaiveDate) -> Result<Vec<PricePoint>> {
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }

    points.sort_by_key(|p| p.date);
    if let Some(pair) = points.windows(2).find(|pair| pair[0].date == pair[1].date) {
        return Err(Error::DuplicateDate { date: pair[0].date });
    }

    points.retain(|p| p.date >= start && p.date <= end);
    Ok(points)
}
