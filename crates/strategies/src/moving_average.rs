// In crates/strategies/src/moving_average.rs

use crate::MovingAverage;
use core_types::{Error, Result};
use rust_decimal::Decimal;
use std::collections::VecDeque;

/// Trailing arithmetic mean over at most `period` closes.
///
/// Until `period` observations have been seen the window simply grows, so the
/// first value equals the first close.
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    window: VecDeque<Decimal>,
    sum: Decimal,
}

impl SimpleMovingAverage {
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(Error::invalid_parameter("period", "must be greater than 0"));
        }
        Ok(Self {
            period,
            window: VecDeque::with_capacity(period),
            sum: Decimal::ZERO,
        })
    }
}

impl MovingAverage for SimpleMovingAverage {
    fn name(&self) -> &'static str {
        "SMA"
    }

    fn period(&self) -> usize {
        self.period
    }

    fn next(&mut self, close: Decimal) -> Decimal {
        if self.window.len() == self.period {
            if let Some(oldest) = self.window.pop_front() {
                self.sum -= oldest;
            }
        }
        self.window.push_back(close);
        self.sum += close;

        self.sum / Decimal::from(self.window.len())
    }
}

/// Exponential moving average with `alpha = 2 / (period + 1)`, seeded with the first close.
#[derive(Debug, Clone)]
pub struct ExponentialMovingAverage {
    period: usize,
    alpha: Decimal,
    current: Option<Decimal>,
}

impl ExponentialMovingAverage {
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(Error::invalid_parameter("period", "must be greater than 0"));
        }
        Ok(Self {
            period,
            alpha: Decimal::TWO / Decimal::from(period + 1),
            current: None,
        })
    }

    pub fn alpha(&self) -> Decimal {
        self.alpha
    }
}

impl MovingAverage for ExponentialMovingAverage {
    fn name(&self) -> &'static str {
        "EMA"
    }

    fn period(&self) -> usize {
        self.period
    }

    fn next(&mut self, close: Decimal) -> Decimal {
        let value = match self.current {
            None => close,
            Some(previous) => self.alpha * close + (Decimal::ONE - self.alpha) * previous,
        };
        self.current = Some(value);
        value
    }
}
