// In crates/strategies/src/signal.rs

use core_types::{PositionSignal, TransitionEvent, TrendPair};

/// Derives the daily long/flat signal and the days on which it changes.
///
/// A single forward pass: each day's signal depends only on that day's averages,
/// and each transition only on the previous day's signal. The first day has no
/// predecessor and therefore never produces a transition.
pub fn generate_signal(trend: &[TrendPair]) -> (Vec<PositionSignal>, Vec<TransitionEvent>) {
    let mut signals = Vec::with_capacity(trend.len());
    let mut transitions = Vec::new();
    let mut previous: Option<PositionSignal> = None;

    for pair in trend {
        let current = PositionSignal::from_trend(pair);

        if let Some(event) = previous.and_then(|prev| TransitionEvent::between(pair.date, prev, current)) {
            tracing::debug!(date = %event.date, action = %event.action, "Position changed.");
            transitions.push(event);
        }

        signals.push(current);
        previous = Some(current);
    }

    (signals, transitions)
}
