// In crates/core-types/src/lib.rs

pub mod error;
pub mod strategy;
pub mod types;

// Re-export the most important types for easy access from other crates.
pub use error::{Error, Result};
pub use strategy::StrategyKind;
pub use types::{Action, PositionSignal, PricePoint, Symbol, TransitionEvent, TrendPair};
