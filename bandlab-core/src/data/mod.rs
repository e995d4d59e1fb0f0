//! Price sources: provider trait, Yahoo Finance fetch, CSV import.

pub mod import;
pub mod provider;
pub mod yahoo;

pub use import::CsvProvider;
pub use provider::{DataError, PriceProvider};
pub use yahoo::YahooProvider;
