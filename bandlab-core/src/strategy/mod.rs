//! Strategy trait and concrete strategies.
//!
//! Strategies are tick-driven: the engine feeds one (date, price) observation
//! at a time and each strategy updates its own private state. Strategies never
//! see each other's state, which is what makes per-strategy fan-out safe to
//! parallelize if it ever becomes worthwhile.

pub mod bollinger;

pub use bollinger::BollingerStrategy;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::StrategyReport;

/// Configuration errors, rejected at construction before any tick runs.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("window length must be >= 1 (got {0})")]
    InvalidWindow(usize),

    #[error("band width multiplier must be finite and non-negative (got {0})")]
    InvalidBandWidth(f64),

    #[error("default units must be finite and non-zero (got {0})")]
    InvalidUnits(f64),
}

/// Lifecycle phase of a tick-driven strategy.
///
/// Warming: fewer than `n` ticks seen, window statistics undefined, no
/// transaction can fire. Active: window fully populated. The transition
/// happens exactly once and never reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Warming,
    Active,
}

/// Trait for tick-driven trading strategies.
///
/// `tick` must be called with non-decreasing dates; the strategy does not
/// re-sort and the result of out-of-order delivery is undefined.
pub trait Strategy: Send {
    /// Human-readable name (e.g., "bollinger").
    fn name(&self) -> &str;

    /// Consume one observation, updating internal state and possibly
    /// recording a transaction.
    fn tick(&mut self, date: NaiveDate, price: f64);

    /// Snapshot of the accumulated sequences for the reporting collaborator.
    fn report(&self) -> StrategyReport;
}
