 // In crates/analytics/src/types.rs

use chrono::NaiveDate;
use core_types::Action;
use rust_decimal::Decimal;
use serde::Serialize;

/// One row of the position table: a single Buy or Sell event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeRecord {
    pub date: NaiveDate,
    pub action: Action,
    /// The close on `date`, used as the executed price.
    pub price: Decimal,
    pub quantity: Decimal,
    pub amount: Decimal,
    /// Running total of `amount` up to and including this record.
    pub cumulative_amount: Decimal,
}

/// Aggregate counts over a trade ledger.
///
/// `sell_count` is what the report calls "win trades" and `buy_count` the
/// "loss trades". A sell is counted as a win regardless of its price relative
/// to the preceding buy.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct PerformanceSummary {
    pub total_trades: u32,
    pub sell_count: u32,
    pub buy_count: u32,
    /// Percentage in `[0, 100]`; `None` when there were no trades.
    pub win_rate: Option<f64>,
}

impl PerformanceSummary {
    /// The summary reported when the window produced no trades.
    pub fn no_trades() -> Self {
        Self::default()
    }

    pub fn has_trades(&self) -> bool {
        self.total_trades > 0
    }

    /// The win rate as shown to users, e.g. "50.00%" or "N/A".
    pub fn win_rate_display(&self) -> String {
        match self.win_rate {
            Some(rate) => format!("{:.2}%", rate),
            None => "N/A".to_string(),
        }
    }
}
