//! Two-sided percentile confidence intervals.
//!
//! The interval at level L keeps the central L% of the observations:
//! `tail = (100 − L)/2`, `low = P(tail)`, `high = P(100 − tail)`, with `P`
//! either the interpolated or the nearest-rank percentile.
//!
//! # Examples
//!
//! ```
//! use u_duration::interval::{confidence_interval, confidence_interval_nearest_rank};
//!
//! let data = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
//! let ci = confidence_interval(&data, 90.0).unwrap();
//! assert!((ci.low - 14.5).abs() < 1e-9);
//! assert!((ci.high - 95.5).abs() < 1e-9);
//!
//! let nr = confidence_interval_nearest_rank(&data, 90.0).unwrap();
//! assert_eq!((nr.low, nr.high), (10.0, 100.0));
//! ```

use crate::descriptive::{percentile_nearest_rank_sorted, percentile_sorted, sorted_copy};

/// Confidence level used by the host application.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 90.0;

/// Fewest observations for which an interval is reported.
pub const MIN_INTERVAL_SAMPLES: usize = 5;

/// Percentile estimator backing an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PercentileMethod {
    /// Linear interpolation at rank (N−1)·p/100.
    #[default]
    Interpolated,
    /// Order statistic at index ⌈N·p/100⌉−1.
    NearestRank,
}

/// A two-sided interval in the unit of the observations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceInterval {
    /// Lower bound, the percentile at `(100 − level)/2`.
    pub low: f64,
    /// Upper bound, the percentile at `(100 + level)/2`.
    pub high: f64,
}

impl ConfidenceInterval {
    /// `high − low`.
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Whether `value` lies in `[low, high]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Interpolated-percentile interval at `level` percent.
///
/// # Returns
///
/// `None` if fewer than 5 observations, non-finite data, or `level`
/// outside `(0, 100)`.
pub fn confidence_interval(data: &[f64], level: f64) -> Option<ConfidenceInterval> {
    confidence_interval_with(data, level, PercentileMethod::Interpolated)
}

/// Nearest-rank interval at `level` percent. Bounds are always observations.
pub fn confidence_interval_nearest_rank(data: &[f64], level: f64) -> Option<ConfidenceInterval> {
    confidence_interval_with(data, level, PercentileMethod::NearestRank)
}

/// Interval at `level` percent using the given percentile estimator.
pub fn confidence_interval_with(
    data: &[f64],
    level: f64,
    method: PercentileMethod,
) -> Option<ConfidenceInterval> {
    if data.len() < MIN_INTERVAL_SAMPLES {
        tracing::debug!(n = data.len(), "confidence interval unavailable: too few observations");
        return None;
    }
    if !(level > 0.0 && level < 100.0) || data.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let sorted = sorted_copy(data);
    let tail = (100.0 - level) / 2.0;
    let (low, high) = match method {
        PercentileMethod::Interpolated => (
            percentile_sorted(&sorted, tail)?,
            percentile_sorted(&sorted, 100.0 - tail)?,
        ),
        PercentileMethod::NearestRank => (
            percentile_nearest_rank_sorted(&sorted, tail)?,
            percentile_nearest_rank_sorted(&sorted, 100.0 - tail)?,
        ),
    };

    Some(ConfidenceInterval { low, high })
}
