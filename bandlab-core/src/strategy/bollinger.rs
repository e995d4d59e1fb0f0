//! Bollinger band strategy: trailing mean +/- standard deviation band,
//! trade on a strict band crossing.
//!
//! Each tick appends the observation, recomputes the trailing `n`-price
//! window (O(n), matching the reference recompute semantics exactly; an
//! incremental accumulator would be faster but numerically less stable),
//! derives `mean +/- k * std` using population std (divide by N), and
//! records a buy above the upper band or a sell below the lower band.

use chrono::NaiveDate;

use super::{Phase, Strategy, StrategyError};
use crate::domain::Transaction;
use crate::report::StrategyReport;
use crate::stats;

/// Bollinger band strategy over a growing price history.
///
/// All histories grow in lockstep, one entry per tick:
/// `prices.len() == dates.len() == upper_bands.len() == lower_bands.len()`.
/// Band entries are `None` until the window first fills.
#[derive(Debug, Clone)]
pub struct BollingerStrategy {
    n: usize,
    k: f64,
    default_units: f64,
    prices: Vec<f64>,
    dates: Vec<NaiveDate>,
    upper_bands: Vec<Option<f64>>,
    lower_bands: Vec<Option<f64>>,
    transactions: Vec<Transaction>,
}

impl BollingerStrategy {
    /// Create a strategy with window length `n`, band width `k`, and trade
    /// size `default_units`.
    ///
    /// `k == 0.0` is allowed and degenerates both bands to the moving mean.
    /// The sign of `default_units` is normalized to positive: direction is
    /// decided by the crossing, not by configuration.
    pub fn new(n: usize, k: f64, default_units: f64) -> Result<Self, StrategyError> {
        if n < 1 {
            return Err(StrategyError::InvalidWindow(n));
        }
        if !k.is_finite() || k < 0.0 {
            return Err(StrategyError::InvalidBandWidth(k));
        }
        if !default_units.is_finite() || default_units == 0.0 {
            return Err(StrategyError::InvalidUnits(default_units));
        }

        Ok(Self {
            n,
            k,
            default_units: default_units.abs(),
            prices: Vec::new(),
            dates: Vec::new(),
            upper_bands: Vec::new(),
            lower_bands: Vec::new(),
            transactions: Vec::new(),
        })
    }

    pub fn window_len(&self) -> usize {
        self.n
    }

    pub fn band_width(&self) -> f64 {
        self.k
    }

    pub fn phase(&self) -> Phase {
        if self.prices.len() < self.n {
            Phase::Warming
        } else {
            Phase::Active
        }
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn upper_bands(&self) -> &[Option<f64>] {
        &self.upper_bands
    }

    pub fn lower_bands(&self) -> &[Option<f64>] {
        &self.lower_bands
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Trailing-window mean at every tick seen so far, `None` where the
    /// window was not yet full. Recomputed fresh on each call.
    pub fn moving_means(&self) -> Vec<Option<f64>> {
        stats::rolling_mean(&self.prices, self.n)
    }

    /// The last `n` prices, once at least `n` have been observed.
    fn trailing_window(&self) -> Option<&[f64]> {
        if self.prices.len() < self.n {
            None
        } else {
            Some(&self.prices[self.prices.len() - self.n..])
        }
    }
}

impl Strategy for BollingerStrategy {
    fn name(&self) -> &str {
        "bollinger"
    }

    fn tick(&mut self, date: NaiveDate, price: f64) {
        if let Some(&last) = self.dates.last() {
            debug_assert!(
                date >= last,
                "ticks must arrive in non-decreasing date order ({last} then {date})"
            );
        }

        self.prices.push(price);
        self.dates.push(date);

        let bands = self.trailing_window().map(|window| {
            let mean = stats::mean(window);
            let std = stats::population_std(window);
            (mean + self.k * std, mean - self.k * std)
        });

        // Bands are appended unconditionally to keep the histories in lockstep.
        self.upper_bands.push(bands.map(|(upper, _)| upper));
        self.lower_bands.push(bands.map(|(_, lower)| lower));

        // Strict inequalities: an exact band touch does not trade, and at
        // most one side can fire per tick while k >= 0.
        if let Some((upper, lower)) = bands {
            if price > upper {
                self.transactions
                    .push(Transaction::new(self.default_units, price, date));
            } else if price < lower {
                self.transactions
                    .push(Transaction::new(-self.default_units, price, date));
            }
        }
    }

    fn report(&self) -> StrategyReport {
        StrategyReport {
            name: self.name().to_string(),
            dates: self.dates.clone(),
            prices: self.prices.clone(),
            upper_bands: self.upper_bands.clone(),
            lower_bands: self.lower_bands.clone(),
            moving_means: self.moving_means(),
            transactions: self.transactions.clone(),
        }
    }
}
