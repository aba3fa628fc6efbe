// In crates/strategies/src/types.rs

use core_types::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FAST_PERIOD: usize = 20;
pub const DEFAULT_SLOW_PERIOD: usize = 50;

/// Window lengths for the two averages of the crossover rule.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CrossoverSettings {
    #[serde(default = "default_fast_period")]
    pub fast_period: usize,
    #[serde(default = "default_slow_period")]
    pub slow_period: usize,
}

impl Default for CrossoverSettings {
    fn default() -> Self {
        Self {
            fast_period: DEFAULT_FAST_PERIOD,
            slow_period: DEFAULT_SLOW_PERIOD,
        }
    }
}

impl CrossoverSettings {
    pub fn validate(&self) -> Result<()> {
        if self.fast_period == 0 {
            return Err(Error::invalid_parameter("fast_period", "must be greater than 0"));
        }
        if self.slow_period <= self.fast_period {
            return Err(Error::invalid_parameter(
                "slow_period",
                format!(
                    "must be greater than fast_period ({} <= {})",
                    self.slow_period, self.fast_period
                ),
            ));
        }
        Ok(())
    }
}

// Helper functions for serde defaults
fn default_fast_period() -> usize { DEFAULT_FAST_PERIOD }
fn default_slow_period() -> usize { DEFAULT_SLOW_PERIOD }
