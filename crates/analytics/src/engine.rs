use crate::types::{PerformanceSummary, TradeRecord};
use core_types::{Action, Error, Result};

/// The engine responsible for calculating performance metrics from a trade ledger.
#[derive(Debug, Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts buys and sells and derives the win rate.
    ///
    /// An empty ledger has no defined win rate and is reported as `Error::EmptyLedger`.
    pub fn summarize(&self, ledger: &[TradeRecord]) -> Result<PerformanceSummary> {
        if ledger.is_empty() {
            return Err(Error::EmptyLedger);
        }

        let total_trades = ledger.len() as u32;
        let sell_count = ledger.iter().filter(|t| t.action == Action::Sell).count() as u32;
        let buy_count = total_trades - sell_count;
        let win_rate = (sell_count as f64 / total_trades as f64) * 100.0;

        Ok(PerformanceSummary {
            total_trades,
            sell_count,
            buy_count,
            win_rate: Some(win_rate),
        })
    }

    /// Like `summarize`, but reports an empty ledger as the zero "no trades" summary.
    pub fn summarize_or_empty(&self, ledger: &[TradeRecord]) -> Result<PerformanceSummary> {
        match self.summarize(ledger) {
            Err(Error::EmptyLedger) => {
                tracing::warn!("No trades in the selected window; win rate is not available.");
                Ok(PerformanceSummary::no_trades())
            }
            other => other,
        }
    }
}
