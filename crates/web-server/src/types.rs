// In crates/web-server/src/types.rs

use app_config::types::BacktestSettings;
use backtester::{principal_from_f64, BacktestRequest};
use chrono::NaiveDate;
use core_types::Symbol;
use serde::Deserialize;

/// The JSON body of `POST /api/backtests`.
#[derive(Debug, Deserialize)]
pub struct BacktestParams {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    // Missing values fall back to the configured defaults.
    #[serde(default)]
    pub principal: Option<f64>,
    #[serde(default)]
    pub strategy: Option<String>,
}

impl BacktestParams {
    pub fn into_request(self, defaults: &BacktestSettings) -> core_types::Result<BacktestRequest> {
        let principal = principal_from_f64(self.principal.unwrap_or(defaults.principal))?;
        Ok(BacktestRequest {
            symbol: Symbol(self.symbol),
            start_date: self.start_date,
            end_date: self.end_date,
            principal,
            strategy: self.strategy.unwrap_or_else(|| defaults.strategy.clone()),
        })
    }
}
