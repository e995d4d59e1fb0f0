//! PricePoint: a single dated price observation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One (date, price) observation from a price source.
///
/// Immutable once created. Ordering matters: strategies must be fed points
/// in non-decreasing date order, which is the producer's contract to uphold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_roundtrip() {
        let point = PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 101.25);
        let json = serde_json::to_string(&point).unwrap();
        let deser: PricePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, deser);
    }
}
