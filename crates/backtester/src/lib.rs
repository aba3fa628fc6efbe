pub mod ledger;

use std::collections::BTreeMap;

use analytics::engine::AnalyticsEngine;
use analytics::types::{PerformanceSummary, TradeRecord};
use chrono::NaiveDate;
use core_types::{
    Action, Error, PositionSignal, PricePoint, Result, StrategyKind, Symbol, TrendPair,
};
use rust_decimal::prelude::*;
use serde::Serialize;
use strategies::{generate_signal, CrossoverSettings, TrendEngine};

pub use ledger::{build_ledger, TradeLedger};

/// Everything that parameterises one backtest run.
#[derive(Debug, Clone)]
pub struct BacktestRequest {
    /// Used for labelling only.
    pub symbol: Symbol,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub principal: Decimal,
    /// "SMA" or "EMA".
    pub strategy: String,
}

/// A single day of the input series, annotated for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedBar {
    pub date: NaiveDate,
    pub close: Decimal,
    pub fast: Decimal,
    pub slow: Decimal,
    pub signal: PositionSignal,
    /// Set on the days where the position changed.
    pub action: Option<Action>,
}

/// The complete, immutable result of a run.
#[derive(Debug, Clone, Serialize)]
pub struct BacktestReport {
    pub symbol: Symbol,
    pub strategy: StrategyKind,
    pub principal: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub series: Vec<AnnotatedBar>,
    pub trades: Vec<TradeRecord>,
    pub summary: PerformanceSummary,
}

/// The engine for running a crossover backtest over an already-loaded price series.
///
/// Holds only configuration; every `run` is independent of previous runs.
#[derive(Debug, Clone, Default)]
pub struct Backtester {
    settings: CrossoverSettings,
}

impl Backtester {
    pub fn new(settings: CrossoverSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CrossoverSettings {
        &self.settings
    }

    /// Runs the full pipeline: averages, signal, ledger, summary.
    ///
    /// Parameters are validated before any computation; on failure nothing
    /// partial is returned.
    pub fn run(&self, request: &BacktestRequest, prices: &[PricePoint]) -> Result<BacktestReport> {
        let engine = TrendEngine::new(&request.strategy, self.settings)?;
        if request.principal <= Decimal::ZERO {
            return Err(Error::invalid_parameter(
                "principal",
                format!("must be positive, got {}", request.principal),
            ));
        }
        validate_series(prices)?;

        tracing::info!(
            symbol = %request.symbol,
            strategy = %engine.kind(),
            start = %request.start_date,
            end = %request.end_date,
            bars = prices.len(),
            "Starting backtest."
        );

        // --- 1. Smoothing ---
        let trend = engine.compute(prices)?;

        // --- 2. Signal & transitions ---
        let (signals, transitions) = generate_signal(&trend);

        // --- 3. Trade ledger ---
        let closes: BTreeMap<NaiveDate, Decimal> = prices.iter().map(|p| (p.date, p.close)).collect();
        let trades = build_ledger(&transitions, &closes, request.principal)?;

        // --- 4. Summary ---
        let summary = AnalyticsEngine::new().summarize_or_empty(&trades)?;

        let actions: BTreeMap<NaiveDate, Action> = transitions.iter().map(|t| (t.date, t.action)).collect();
        let series = annotate(prices, &trend, &signals, &actions);

        tracing::info!(
            symbol = %request.symbol,
            trades = summary.total_trades,
            sells = summary.sell_count,
            buys = summary.buy_count,
            win_rate = %summary.win_rate_display(),
            "Backtest finished."
        );

        Ok(BacktestReport {
            symbol: request.symbol.clone(),
            strategy: engine.kind(),
            principal: request.principal,
            start_date: request.start_date,
            end_date: request.end_date,
            series,
            trades,
            summary,
        })
    }
}

/// Converts a configured or user-entered principal into a decimal amount.
pub fn principal_from_f64(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .ok_or_else(|| Error::invalid_parameter("principal", format!("{} is not a representable amount", value)))
}

/// Dates must be strictly increasing and closes non-negative.
fn validate_series(prices: &[PricePoint]) -> Result<()> {
    for window in prices.windows(2) {
        if window[1].date <= window[0].date {
            return Err(Error::invalid_parameter(
                "prices",
                format!(
                    "dates must be strictly increasing ({} follows {})",
                    window[1].date, window[0].date
                ),
            ));
        }
    }
    if let Some(point) = prices.iter().find(|p| p.close < Decimal::ZERO) {
        return Err(Error::invalid_parameter(
            "prices",
            format!("negative close {} on {}", point.close, point.date),
        ));
    }
    Ok(())
}

fn annotate(
    prices: &[PricePoint],
    trend: &[TrendPair],
    signals: &[PositionSignal],
    actions: &BTreeMap<NaiveDate, Action>,
) -> Vec<AnnotatedBar> {
    prices
        .iter()
        .zip(trend)
        .zip(signals)
        .map(|((point, pair), signal)| AnnotatedBar {
            date: point.date,
            close: point.close,
            fast: pair.fast,
            slow: pair.slow,
            signal: *signal,
            action: actions.get(&point.date).copied(),
        })
        .collect()
}
