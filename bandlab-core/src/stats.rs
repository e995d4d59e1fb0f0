//! Window statistics: mean, population standard deviation, rolling mean.
//!
//! A window that is not yet fully populated has no defined statistic; the
//! rolling helpers return `None` for those positions rather than a NaN
//! sentinel, so absence is explicit and cannot poison downstream arithmetic.

/// Arithmetic mean of a non-empty slice.
pub fn mean(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty(), "mean of an empty slice is undefined");
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by N, not N-1) of a non-empty slice.
pub fn population_std(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Trailing-window mean for every position in `values`.
///
/// Position `i` holds the mean of `values[i + 1 - window ..= i]`, or `None`
/// while fewer than `window` samples exist. Output length equals input length.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    debug_assert!(window >= 1, "window must be >= 1");
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            if i + 1 < window {
                None
            } else {
                Some(mean(&values[i + 1 - window..=i]))
            }
        })
        .collect()
}
