//! Domain types: price observations and simulated trades.

pub mod price;
pub mod transaction;

pub use price::PricePoint;
pub use transaction::Transaction;
