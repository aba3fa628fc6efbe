use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::Error;

/// The smoothing method used for both the fast and the slow average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StrategyKind {
    Sma,
    Ema,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Sma => "SMA",
            StrategyKind::Ema => "EMA",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SMA" => Ok(StrategyKind::Sma),
            "EMA" => Ok(StrategyKind::Ema),
            _ => Err(Error::InvalidStrategy {
                value: s.to_string(),
            }),
        }
    }
}
