//! StrategyReport: immutable snapshot for the reporting collaborator.
//!
//! The engine guarantees the per-tick sequences are index-aligned and equal
//! in length; the cumulative series are derived from the transaction log and
//! aligned by transaction date instead.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Transaction;

/// Owned snapshot of everything a strategy accumulated during a run.
///
/// Band and mean entries are `None` for ticks where the trailing window was
/// not yet full; they serialize as JSON `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyReport {
    pub name: String,
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
    pub upper_bands: Vec<Option<f64>>,
    pub lower_bands: Vec<Option<f64>>,
    pub moving_means: Vec<Option<f64>>,
    pub transactions: Vec<Transaction>,
}

impl StrategyReport {
    /// Number of ticks the strategy consumed.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Cumulative position (running sum of signed transaction units),
    /// one point per transaction.
    pub fn position_series(&self) -> Vec<(NaiveDate, f64)> {
        let mut position = 0.0;
        self.transactions
            .iter()
            .map(|t| {
                position += t.units;
                (t.date, position)
            })
            .collect()
    }

    /// Cumulative profit and loss: running sum of negated transaction values
    /// (a buy spends cash, a sell raises it), one point per transaction.
    pub fn pnl_series(&self) -> Vec<(NaiveDate, f64)> {
        let mut pnl = 0.0;
        self.transactions
            .iter()
            .map(|t| {
                pnl += -t.value();
                (t.date, pnl)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(offset: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() + chrono::Duration::days(offset as i64)
    }

    fn sample_report() -> StrategyReport {
        StrategyReport {
            name: "bollinger".into(),
            dates: vec![day(0), day(1), day(2)],
            prices: vec![10.0, 20.0, 5.0],
            upper_bands: vec![None, Some(15.0), Some(16.0)],
            lower_bands: vec![None, Some(12.0), Some(9.0)],
            moving_means: vec![None, Some(13.5), Some(12.5)],
            transactions: vec![
                Transaction::new(10.0, 20.0, day(1)),
                Transaction::new(-10.0, 5.0, day(2)),
            ],
        }
    }

    #[test]
    fn position_series_accumulates_units() {
        let report = sample_report();
        assert_eq!(
            report.position_series(),
            vec![(day(1), 10.0), (day(2), 0.0)]
        );
    }

    #[test]
    fn pnl_series_accumulates_negated_values() {
        // Buy 10 @ 20 costs 200; sell 10 @ 5 recovers 50: net -150.
        let report = sample_report();
        assert_eq!(
            report.pnl_series(),
            vec![(day(1), -200.0), (day(2), -150.0)]
        );
    }

    #[test]
    fn absent_bands_serialize_as_null() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["upper_bands"][0].is_null());
        assert_eq!(json["upper_bands"][1], 15.0);

        let roundtrip: StrategyReport = serde_json::from_value(json).unwrap();
        assert_eq!(roundtrip.upper_bands, report.upper_bands);
    }
}
