//! Transaction: a recorded simulated trade.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A simulated trade triggered by a band crossing.
///
/// `units` is signed: positive means a buy (price crossed the upper band),
/// negative means a sell (price crossed the lower band). Transactions are
/// immutable after creation and live in an append-only log owned by the
/// strategy that recorded them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub units: f64,
    pub price: f64,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(units: f64, price: f64, date: NaiveDate) -> Self {
        Self { units, price, date }
    }

    /// Value of the transaction with no fees: `units * price`.
    pub fn value(&self) -> f64 {
        self.units * self.price
    }

    /// Value including a flat fee and a proportional fee.
    ///
    /// The proportional fee applies to the absolute gross value, so it
    /// increases the magnitude of buys and shrinks the magnitude of sells;
    /// the flat fee is added as-is.
    pub fn value_with_costs(&self, cost_base: f64, cost_perc: f64) -> f64 {
        let gross = self.units * self.price;
        gross + gross.abs() * cost_perc + cost_base
    }

    pub fn is_buy(&self) -> bool {
        self.units > 0.0
    }
}
