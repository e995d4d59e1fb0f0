//! StrategyEngine: the tick dispatcher.
//!
//! Owns the master chronological price series and a set of named strategies.
//! `start()` feeds every observation, in the order supplied, to every
//! registered strategy. The engine does not sort: ascending date order is the
//! caller's contract. Strategies are isolated from each other, so fan-out
//! order only needs to be deterministic, which the BTreeMap key order gives.

use std::collections::BTreeMap;

use crate::domain::PricePoint;
use crate::strategy::Strategy;

/// Drives a set of strategies over one price series.
pub struct StrategyEngine {
    series: Vec<PricePoint>,
    strategies: BTreeMap<String, Box<dyn Strategy>>,
}

impl StrategyEngine {
    pub fn new(series: Vec<PricePoint>) -> Self {
        Self {
            series,
            strategies: BTreeMap::new(),
        }
    }

    /// Register a strategy under a name. A second registration with the same
    /// name replaces the first.
    pub fn register(&mut self, name: impl Into<String>, strategy: Box<dyn Strategy>) {
        self.strategies.insert(name.into(), strategy);
    }

    /// Feed the whole series through every registered strategy.
    ///
    /// An empty series completes immediately; every strategy stays in its
    /// warming phase with zero history.
    pub fn start(&mut self) {
        for point in &self.series {
            for strategy in self.strategies.values_mut() {
                strategy.tick(point.date, point.price);
            }
        }
    }

    pub fn series(&self) -> &[PricePoint] {
        &self.series
    }

    pub fn strategy(&self, name: &str) -> Option<&dyn Strategy> {
        self.strategies.get(name).map(|s| s.as_ref())
    }

    /// Iterate registered strategies in deterministic (name) order.
    pub fn strategies(&self) -> impl Iterator<Item = (&str, &dyn Strategy)> {
        self.strategies.iter().map(|(n, s)| (n.as_str(), s.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{BollingerStrategy, Phase};
    use chrono::NaiveDate;

    fn make_points(prices: &[f64]) -> Vec<PricePoint> {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint::new(base + chrono::Duration::days(i as i64), price))
            .collect()
    }

    #[test]
    fn empty_series_leaves_strategies_warming() {
        let mut engine = StrategyEngine::new(Vec::new());
        engine.register(
            "bollinger",
            Box::new(BollingerStrategy::new(4, 0.75, 10.0).unwrap()),
        );
        engine.start();

        let report = engine.strategy("bollinger").unwrap().report();
        assert!(report.is_empty());
        assert!(report.transactions.is_empty());
    }

    #[test]
    fn every_strategy_sees_every_tick() {
        let mut engine = StrategyEngine::new(make_points(&[10.0, 11.0, 12.0]));
        engine.register(
            "fast",
            Box::new(BollingerStrategy::new(2, 1.0, 10.0).unwrap()),
        );
        engine.register(
            "slow",
            Box::new(BollingerStrategy::new(10, 1.0, 10.0).unwrap()),
        );
        engine.start();

        for (_, strategy) in engine.strategies() {
            assert_eq!(strategy.report().len(), 3);
        }
    }

    #[test]
    fn strategies_iterate_in_name_order() {
        let mut engine = StrategyEngine::new(Vec::new());
        engine.register("zeta", Box::new(BollingerStrategy::new(2, 1.0, 10.0).unwrap()));
        engine.register("alpha", Box::new(BollingerStrategy::new(2, 1.0, 10.0).unwrap()));

        let names: Vec<_> = engine.strategies().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn reregistering_a_name_replaces_the_strategy() {
        let mut engine = StrategyEngine::new(make_points(&[10.0]));
        engine.register("b", Box::new(BollingerStrategy::new(5, 1.0, 10.0).unwrap()));
        engine.register("b", Box::new(BollingerStrategy::new(1, 1.0, 10.0).unwrap()));
        engine.start();

        // The replacement (n=1) is active after a single tick; the original
        // (n=5) would still be warming.
        let report = engine.strategy("b").unwrap().report();
        assert!(report.upper_bands[0].is_some());
    }

    #[test]
    fn order_dependence_of_the_trailing_window() {
        // The same two prices in opposite orders produce different band
        // histories once windows fill at different absolute levels.
        let mut forward = BollingerStrategy::new(2, 0.0, 10.0).unwrap();
        let mut reversed = BollingerStrategy::new(2, 0.0, 10.0).unwrap();
        for (i, point) in make_points(&[10.0, 20.0]).iter().enumerate() {
            forward.tick(point.date, point.price);
            let flipped = if i == 0 { 20.0 } else { 10.0 };
            reversed.tick(point.date, flipped);
        }

        assert_eq!(forward.upper_bands()[1], reversed.upper_bands()[1]);
        // Means agree (same window contents), but the crossing direction
        // differs: rising fires a buy, falling fires a sell.
        assert_eq!(forward.transactions()[0].units, 10.0);
        assert_eq!(reversed.transactions()[0].units, -10.0);
    }

    #[test]
    fn phase_is_queryable_through_the_concrete_type() {
        let mut strategy = BollingerStrategy::new(2, 1.0, 10.0).unwrap();
        assert_eq!(strategy.phase(), Phase::Warming);
        for point in make_points(&[10.0, 11.0]) {
            strategy.tick(point.date, point.price);
        }
        assert_eq!(strategy.phase(), Phase::Active);
    }
}
