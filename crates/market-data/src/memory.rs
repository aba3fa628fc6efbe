use crate::{select_window, Error, PriceSource, Result};
use chrono::NaiveDate;
use core_types::{PricePoint, Symbol};
use std::collections::HashMap;
use std::path::PathBuf;

/// A price source backed by series held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPriceSource {
    series: HashMap<Symbol, Vec<PricePoint>>,
}

impl InMemoryPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prices(mut self, symbol: &str, points: Vec<PricePoint>) -> Self {
        self.series.insert(Symbol(symbol.to_string()), points);
        self
    }
}

impl PriceSource for InMemoryPriceSource {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn load(&self, symbol: &Symbol, start: NaiveDate, end: NaiveDate) -> Result<Vec<PricePoint>> {
        let points = self.series.get(symbol).ok_or_else(|| Error::SymbolNotFound {
            symbol: symbol.0.clone(),
            path: PathBuf::from("<memory>"),
        })?;
        select_window(points.clone(), start, end)
    }
}
