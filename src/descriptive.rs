//! Descriptive statistics and percentile estimators.
//!
//! Every statistic comes in two forms:
//!
//! - `try_*` returns `Option<f64>`: `None` for empty input (or too few
//!   observations, or non-finite values). Use these when composing.
//! - The plain form returns `f64` with `0.0` standing in for "no data",
//!   which is what display code wants.
//!
//! # Examples
//!
//! ```
//! use u_duration::descriptive::{mean, percentile, percentile_nearest_rank, try_mean};
//!
//! let data = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
//! assert!((mean(&data) - 55.0).abs() < 1e-12);
//! assert!((percentile(&data, 5.0) - 14.5).abs() < 1e-9);
//! assert_eq!(percentile_nearest_rank(&data, 5.0), 10.0);
//!
//! assert_eq!(mean(&[]), 0.0);
//! assert_eq!(try_mean(&[]), None);
//! ```

use u_numflow::stats;

/// Returns an ascending copy of `data`. NaN sorts as equal to its neighbours.
pub(crate) fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|v| v.is_finite())
}

// ---------------------------------------------------------------------------
// Optional forms
// ---------------------------------------------------------------------------

/// Smallest observation. `None` if empty or non-finite.
pub fn try_min(data: &[f64]) -> Option<f64> {
    if !all_finite(data) {
        return None;
    }
    stats::min(data)
}

/// Largest observation. `None` if empty or non-finite.
pub fn try_max(data: &[f64]) -> Option<f64> {
    if !all_finite(data) {
        return None;
    }
    stats::max(data)
}

/// Arithmetic mean (compensated summation). `None` if empty or non-finite.
pub fn try_mean(data: &[f64]) -> Option<f64> {
    if !all_finite(data) {
        return None;
    }
    stats::mean(data)
}

/// Median: middle order statistic, or the mean of the two middle ones.
pub fn try_median(data: &[f64]) -> Option<f64> {
    if !all_finite(data) {
        return None;
    }
    stats::median(data)
}

/// Sample standard deviation with Bessel's correction (denominator N−1).
///
/// `None` for fewer than two observations or non-finite values.
pub fn try_std_dev(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !all_finite(data) {
        return None;
    }
    stats::std_dev(data)
}

/// Percentile by linear interpolation at fractional rank (N−1)·p/100.
///
/// `p` is clamped into `[0, 100]`. `None` for empty input, non-finite data,
/// or NaN `p`.
pub fn try_percentile(data: &[f64], p: f64) -> Option<f64> {
    if data.is_empty() || p.is_nan() || !all_finite(data) {
        return None;
    }
    percentile_sorted(&sorted_copy(data), p)
}

/// Nearest-rank percentile: the order statistic at index ⌈N·p/100⌉−1,
/// clamped to `[0, N−1]`.
pub fn try_percentile_nearest_rank(data: &[f64], p: f64) -> Option<f64> {
    if data.is_empty() || p.is_nan() || !all_finite(data) {
        return None;
    }
    percentile_nearest_rank_sorted(&sorted_copy(data), p)
}

pub(crate) fn percentile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    stats::quantile_sorted(sorted, p.clamp(0.0, 100.0) / 100.0)
}

pub(crate) fn percentile_nearest_rank_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let p = p.clamp(0.0, 100.0);
    let rank = (n as f64 * p / 100.0).ceil() as i64 - 1;
    let idx = rank.clamp(0, n as i64 - 1) as usize;
    Some(sorted[idx])
}

// ---------------------------------------------------------------------------
// Zero-sentinel forms
// ---------------------------------------------------------------------------

/// Smallest observation, `0.0` for empty input.
pub fn min(data: &[f64]) -> f64 {
    try_min(data).unwrap_or(0.0)
}

/// Largest observation, `0.0` for empty input.
pub fn max(data: &[f64]) -> f64 {
    try_max(data).unwrap_or(0.0)
}

/// Arithmetic mean, `0.0` for empty input.
pub fn mean(data: &[f64]) -> f64 {
    try_mean(data).unwrap_or(0.0)
}

/// Median, `0.0` for empty input.
pub fn median(data: &[f64]) -> f64 {
    try_median(data).unwrap_or(0.0)
}

/// Sample standard deviation, `0.0` for fewer than two observations.
pub fn std_dev(data: &[f64]) -> f64 {
    try_std_dev(data).unwrap_or(0.0)
}

/// Interpolated percentile, `0.0` for empty input.
///
/// # Examples
///
/// ```
/// use u_duration::descriptive::percentile;
///
/// let data = [3.0, 1.0, 2.0];
/// assert_eq!(percentile(&data, 0.0), 1.0);
/// assert_eq!(percentile(&data, 50.0), 2.0);
/// assert_eq!(percentile(&data, 100.0), 3.0);
/// ```
pub fn percentile(data: &[f64], p: f64) -> f64 {
    try_percentile(data, p).unwrap_or(0.0)
}

/// Nearest-rank percentile, `0.0` for empty input.
pub fn percentile_nearest_rank(data: &[f64], p: f64) -> f64 {
    try_percentile_nearest_rank(data, p).unwrap_or(0.0)
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Basic description of an observation set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Number of observations.
    pub count: usize,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle order statistic, or the mean of the two middle ones.
    pub median: f64,
    /// Sample standard deviation; `0.0` when `count < 2`.
    pub std_dev: f64,
}

/// Describes `data` in one pass over a sorted copy.
///
/// # Returns
///
/// `None` if `data` is empty or contains non-finite values.
///
/// # Examples
///
/// ```
/// use u_duration::descriptive::summarize;
///
/// let s = summarize(&[4.0, 2.0, 6.0]).unwrap();
/// assert_eq!(s.count, 3);
/// assert_eq!(s.median, 4.0);
/// assert!((s.std_dev - 2.0).abs() < 1e-12);
/// ```
pub fn summarize(data: &[f64]) -> Option<Summary> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    let sorted = sorted_copy(data);
    let n = sorted.len();
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    };

    Some(Summary {
        count: n,
        min: sorted[0],
        max: sorted[n - 1],
        mean: try_mean(data)?,
        median,
        std_dev: try_std_dev(data).unwrap_or(0.0),
    })
}
