//! Price provider trait and structured error types.
//!
//! The PriceProvider trait abstracts over price sources (Yahoo Finance, CSV
//! import) so the runner can swap implementations and tests can mock them.
//! A provider failure is a hard failure for the run: the engine never sees
//! a partial series and never retries on its own.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::PricePoint;

/// Structured error types for price-source operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("no prices in range for '{symbol}'")]
    EmptyRange { symbol: String },

    #[error("csv parse error: {0}")]
    CsvParse(String),

    #[error("i/o error: {0}")]
    Io(String),
}

/// Trait for price sources.
///
/// `fetch` returns observations sorted oldest-first with non-decreasing
/// dates, which is exactly the ordering contract the strategy engine needs.
pub trait PriceProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily prices for a symbol over an inclusive date range.
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, DataError>;
}
