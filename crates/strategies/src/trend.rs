// In crates/strategies/src/trend.rs

use crate::factory::{create_for_kind, create_moving_averages};
use crate::types::CrossoverSettings;
use core_types::{PricePoint, Result, StrategyKind, TrendPair};

/// Computes the fast/slow averages of a closing-price series.
///
/// The engine itself holds no per-series state: every call to `compute` starts
/// from freshly initialised averages, so one engine can be reused across runs.
#[derive(Debug, Clone, Copy)]
pub struct TrendEngine {
    kind: StrategyKind,
    settings: CrossoverSettings,
}

impl TrendEngine {
    /// Resolves the strategy selector and validates the window lengths.
    pub fn new(strategy: &str, settings: CrossoverSettings) -> Result<Self> {
        // Fails fast on unknown selectors or bad periods.
        let (kind, _) = create_moving_averages(strategy, &settings)?;
        Ok(Self { kind, settings })
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    pub fn settings(&self) -> &CrossoverSettings {
        &self.settings
    }

    /// One `TrendPair` per input point, in input order.
    pub fn compute(&self, prices: &[PricePoint]) -> Result<Vec<TrendPair>> {
        let (mut fast, mut slow) = create_for_kind(self.kind, &self.settings)?;

        let trend = prices
            .iter()
            .map(|point| TrendPair {
                date: point.date,
                fast: fast.next(point.close),
                slow: slow.next(point.close),
            })
            .collect();

        Ok(trend)
    }
}

/// Convenience wrapper: resolve `strategy` and compute the trend in one call.
pub fn compute_trend(
    prices: &[PricePoint],
    strategy: &str,
    settings: &CrossoverSettings,
) -> Result<Vec<TrendPair>> {
    TrendEngine::new(strategy, *settings)?.compute(prices)
}
