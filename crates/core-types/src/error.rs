// In crates/core-types/src/error.rs

use chrono::NaiveDate;
use thiserror::Error;

/// Failures of a backtest run. Every variant is a deterministic function of the
/// inputs, so none of them is worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid strategy '{value}': expected one of SMA, EMA")]
    InvalidStrategy { value: String },

    #[error("Division by zero: close price on {date} is zero or missing")]
    DivisionByZero { date: NaiveDate },

    #[error("No trades were generated in the selected window")]
    EmptyLedger,

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Arithmetic overflow while sizing the trade on {date}")]
    ArithmeticOverflow { date: NaiveDate },
}

impl Error {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
