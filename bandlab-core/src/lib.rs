//! Bandlab Core: the band-strategy evaluation engine.
//!
//! This crate contains everything with algorithmic content:
//! - Domain types (price observations, transactions)
//! - Rolling mean / population standard deviation helpers
//! - The `Strategy` trait and the Bollinger band strategy
//! - The tick-dispatching engine that drives strategies over a price series
//! - Report snapshots for downstream rendering
//! - Data providers (Yahoo Finance fetch, CSV import)
//!
//! Rendering, persistence, and the command surface live outside this crate.

pub mod data;
pub mod domain;
pub mod engine;
pub mod report;
pub mod stats;
pub mod strategy;

pub use domain::{PricePoint, Transaction};
pub use engine::StrategyEngine;
pub use report::StrategyReport;
pub use strategy::{BollingerStrategy, Phase, Strategy, StrategyError};
