// In crates/strategies/src/lib.rs

use rust_decimal::Decimal;

pub mod factory;
pub mod moving_average;
pub mod signal;
pub mod trend;
pub mod types;

pub use signal::generate_signal;
pub use trend::{compute_trend, TrendEngine};
pub use types::CrossoverSettings;

/// The universal interface for a trend-following average.
///
/// An average is a small state machine: it is fed one closing price at a time,
/// in chronological order, and returns its value after absorbing that price.
/// It emits a value from the very first observation onward.
pub trait MovingAverage {
    /// The name of the average, e.g. "SMA".
    fn name(&self) -> &'static str;

    /// The window length the average was configured with.
    fn period(&self) -> usize;

    fn next(&mut self, close: Decimal) -> Decimal;
}
