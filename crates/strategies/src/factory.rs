use crate::moving_average::{ExponentialMovingAverage, SimpleMovingAverage};
use crate::types::CrossoverSettings;
use crate::MovingAverage;
use core_types::{Result, StrategyKind};

/// A freshly initialised (fast, slow) pair of averages.
pub type AveragePair = (Box<dyn MovingAverage + Send>, Box<dyn MovingAverage + Send>);

/// Builds the fast and slow averages for a strategy selector such as "SMA" or "EMA".
///
/// Unknown selectors fail with `Error::InvalidStrategy` before anything is constructed.
pub fn create_moving_averages(
    strategy: &str,
    settings: &CrossoverSettings,
) -> Result<(StrategyKind, AveragePair)> {
    let kind: StrategyKind = strategy.parse()?;
    Ok((kind, create_for_kind(kind, settings)?))
}

pub fn create_for_kind(kind: StrategyKind, settings: &CrossoverSettings) -> Result<AveragePair> {
    settings.validate()?;

    let pair: AveragePair = match kind {
        StrategyKind::Sma => (
            Box::new(SimpleMovingAverage::new(settings.fast_period)?),
            Box::new(SimpleMovingAverage::new(settings.slow_period)?),
        ),
        StrategyKind::Ema => (
            Box::new(ExponentialMovingAverage::new(settings.fast_period)?),
            Box::new(ExponentialMovingAverage::new(settings.slow_period)?),
        ),
    };
    Ok(pair)
}
