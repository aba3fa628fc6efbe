// In crates/backtester/src/ledger.rs

use analytics::types::TradeRecord;
use chrono::NaiveDate;
use core_types::{Error, Result, TransitionEvent};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Records trades in chronological order while keeping the running total.
#[derive(Debug)]
pub struct TradeLedger {
    principal: Decimal,
    trades: Vec<TradeRecord>,
    cumulative_amount: Decimal,
}

impl TradeLedger {
    /// Creates a new, empty ledger. The principal is re-invested in full at every trade.
    pub fn new(principal: Decimal) -> Result<Self> {
        if principal <= Decimal::ZERO {
            return Err(Error::invalid_parameter(
                "principal",
                format!("must be positive, got {}", principal),
            ));
        }
        Ok(Self {
            principal,
            trades: Vec::new(),
            cumulative_amount: Decimal::ZERO,
        })
    }

    /// Sizes the trade for `event` at `price` and appends it.
    pub fn record_trade(&mut self, event: &TransitionEvent, price: Option<Decimal>) -> Result<&TradeRecord> {
        let price = match price {
            Some(price) if !price.is_zero() => price,
            _ => return Err(Error::DivisionByZero { date: event.date }),
        };

        let quantity = self
            .principal
            .checked_div(price)
            .ok_or(Error::ArithmeticOverflow { date: event.date })?;
        let amount = quantity
            .checked_mul(price)
            .ok_or(Error::ArithmeticOverflow { date: event.date })?;
        self.cumulative_amount = self
            .cumulative_amount
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow { date: event.date })?;

        self.trades.push(TradeRecord {
            date: event.date,
            action: event.action,
            price,
            quantity,
            amount,
            cumulative_amount: self.cumulative_amount,
        });
        Ok(&self.trades[self.trades.len() - 1])
    }

    pub fn trades(&self) -> &[TradeRecord] {
        &self.trades
    }

    pub fn into_trades(self) -> Vec<TradeRecord> {
        self.trades
    }
}

/// Turns transition events into the trade ledger.
///
/// The first event whose date has no usable close aborts the whole build; no
/// partial ledger is ever returned.
pub fn build_ledger(
    transitions: &[TransitionEvent],
    prices: &BTreeMap<NaiveDate, Decimal>,
    principal: Decimal,
) -> Result<Vec<TradeRecord>> {
    let mut ledger = TradeLedger::new(principal)?;
    for event in transitions {
        let trade = ledger.record_trade(event, prices.get(&event.date).copied())?;
        tracing::debug!(
            date = %trade.date,
            action = %trade.action,
            price = %trade.price,
            quantity = %trade.quantity,
            "Trade recorded."
        );
    }
    Ok(ledger.into_trades())
}
