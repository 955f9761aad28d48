//! Normal Q-Q diagnostics.
//!
//! Standardized order statistics against theoretical normal quantiles, the
//! R² of the points around the identity line, and a verbal rating of that
//! fit for display.
//!
//! # Examples
//!
//! ```
//! use u_duration::distribution::{qq_plot_data, qq_r_squared, qq_rating, QqRating};
//!
//! let data = [21.0, 24.5, 25.0, 26.0, 27.5, 28.0, 29.0, 31.5];
//! let points = qq_plot_data(&data);
//! assert_eq!(points.len(), data.len());
//!
//! let r2 = qq_r_squared(&points);
//! assert!(r2 > 0.8);
//! assert_ne!(qq_rating(r2), QqRating::Poor);
//! ```

use crate::descriptive::{sorted_copy, try_mean, try_std_dev};
use crate::special::normal_quantile;

/// One point of a normal Q-Q plot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QqPoint {
    /// Φ⁻¹ of the plotting position.
    pub theoretical: f64,
    /// z-score of the order statistic.
    pub observed: f64,
}

/// Q-Q plot data against the standard normal distribution.
///
/// For rank i (0-based) the plotting position is (i + 0.5)/n; the observed
/// coordinate is the z-score of the i-th order statistic using the sample
/// mean and Bessel-corrected standard deviation. Constant data plots every
/// observed value at 0.
///
/// # Returns
///
/// One point per observation in ascending rank, or an empty vector for
/// fewer than 3 observations or non-finite data.
pub fn qq_plot_data(data: &[f64]) -> Vec<QqPoint> {
    let n = data.len();
    if n < 3 || data.iter().any(|v| !v.is_finite()) {
        return Vec::new();
    }

    let sorted = sorted_copy(data);
    let (Some(mean), Some(sd)) = (try_mean(&sorted), try_std_dev(&sorted)) else {
        return Vec::new();
    };

    let nf = n as f64;
    sorted
        .iter()
        .enumerate()
        .map(|(i, &x)| QqPoint {
            theoretical: normal_quantile((i as f64 + 0.5) / nf),
            observed: if sd > 0.0 { (x - mean) / sd } else { 0.0 },
        })
        .collect()
}

/// Coefficient of determination of the Q-Q points around y = x.
///
/// R² = 1 − SSR/SST, SSR = Σ(observed − theoretical)²,
/// SST = Σ(observed − mean(observed))², clamped to [0, 1]. SST = 0 gives 1.
/// An empty slice gives 0.
pub fn qq_r_squared(points: &[QqPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let n = points.len() as f64;
    let mean_obs = points.iter().map(|p| p.observed).sum::<f64>() / n;
    let ssr: f64 = points
        .iter()
        .map(|p| (p.observed - p.theoretical).powi(2))
        .sum();
    let sst: f64 = points.iter().map(|p| (p.observed - mean_obs).powi(2)).sum();

    if sst == 0.0 {
        return 1.0;
    }
    (1.0 - ssr / sst).clamp(0.0, 1.0)
}

/// Verbal grade of a Q-Q R².
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QqRating {
    Poor,
    Fair,
    Moderate,
    Good,
    VeryGood,
    Excellent,
}

impl QqRating {
    /// Title-case display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// One-sentence interpretation for display beside the plot.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Points lie almost exactly on the reference line; durations are very close to normal.",
            Self::VeryGood => "Points follow the reference line closely with only minor deviations.",
            Self::Good => "Points mostly follow the reference line; slight departures in the tails.",
            Self::Moderate => "Noticeable departures from the reference line; normality is questionable.",
            Self::Fair => "Substantial curvature or tail departures; durations are likely skewed or heavy-tailed.",
            Self::Poor => "Points depart strongly from the reference line; durations are not normally distributed.",
        }
    }
}

/// Grades R²: ≥0.99 Excellent, ≥0.95 Very Good, ≥0.90 Good, ≥0.80 Moderate,
/// ≥0.70 Fair, otherwise Poor.
pub fn qq_rating(r_squared: f64) -> QqRating {
    if r_squared >= 0.99 {
        QqRating::Excellent
    } else if r_squared >= 0.95 {
        QqRating::VeryGood
    } else if r_squared >= 0.90 {
        QqRating::Good
    } else if r_squared >= 0.80 {
        QqRating::Moderate
    } else if r_squared >= 0.70 {
        QqRating::Fair
    } else {
        QqRating::Poor
    }
}
