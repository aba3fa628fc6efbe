// In crates/core-types/src/types.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A trading instrument identifier, e.g. "INFY" or "AAPL".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One daily closing price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: Decimal,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Self { date, close }
    }
}

/// The fast and slow moving averages for a single trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPair {
    pub date: NaiveDate,
    pub fast: Decimal,
    pub slow: Decimal,
}

/// The position implied by the crossover rule on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PositionSignal {
    #[default]
    Flat = 0,
    Long = 1,
}

impl PositionSignal {
    /// Long iff the fast average is strictly above the slow one.
    pub fn from_trend(trend: &TrendPair) -> Self {
        if trend.fast > trend.slow {
            PositionSignal::Long
        } else {
            PositionSignal::Flat
        }
    }

    pub fn value(self) -> i8 {
        self as i8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Buy,
    Sell,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => f.write_str("Buy"),
            Action::Sell => f.write_str("Sell"),
        }
    }
}

/// A change of position between two consecutive days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionEvent {
    pub date: NaiveDate,
    pub action: Action,
}

impl TransitionEvent {
    /// Builds the event for `current - previous`, or `None` when the position did not change.
    pub fn between(date: NaiveDate, previous: PositionSignal, current: PositionSignal) -> Option<Self> {
        let action = match current.value() - previous.value() {
            1 => Action::Buy,
            -1 => Action::Sell,
            _ => return None,
        };
        Some(Self { date, action })
    }

    /// +1 for an entry, -1 for an exit.
    pub fn delta(&self) -> i8 {
        match self.action {
            Action::Buy => 1,
            Action::Sell => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn equal_averages_map_to_flat() {
        let trend = TrendPair { date: day(1), fast: dec!(100), slow: dec!(100) };
        assert_eq!(PositionSignal::from_trend(&trend), PositionSignal::Flat);

        let trend = TrendPair { date: day(1), fast: dec!(100.01), slow: dec!(100) };
        assert_eq!(PositionSignal::from_trend(&trend), PositionSignal::Long);
    }

    #[test]
    fn transition_only_on_change() {
        use PositionSignal::*;
        assert_eq!(TransitionEvent::between(day(2), Flat, Flat), None);
        assert_eq!(TransitionEvent::between(day(2), Long, Long), None);

        let buy = TransitionEvent::between(day(2), Flat, Long).unwrap();
        assert_eq!(buy.action, Action::Buy);
        assert_eq!(buy.delta(), 1);

        let sell = TransitionEvent::between(day(3), Long, Flat).unwrap();
        assert_eq!(sell.action, Action::Sell);
        assert_eq!(sell.delta(), -1);
    }
}
