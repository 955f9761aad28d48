//! One-shot analysis of an observation set.
//!
//! [`analyze`] runs every analysis the crate offers over the same durations
//! and bundles the outcomes. Each field is independent: a result the data
//! cannot support is `None` (or empty) without affecting the others.
//!
//! # Examples
//!
//! ```
//! use u_duration::report::analyze;
//!
//! let durations: Vec<f64> = (0..30).map(|i| 20.0 + (i * 7 % 11) as f64).collect();
//! let report = analyze(&durations);
//!
//! assert_eq!(report.summary.unwrap().count, 30);
//! assert!(report.interval.is_some());
//! assert!(report.normality.is_some());
//! assert_eq!(report.qq_points.len(), 30);
//! ```

use crate::descriptive::{summarize, Summary};
use crate::distribution::{qq_plot_data, qq_r_squared, qq_rating, QqPoint, QqRating};
use crate::interval::{
    confidence_interval_with, ConfidenceInterval, PercentileMethod, DEFAULT_CONFIDENCE_LEVEL,
};
use crate::testing::{
    mann_kendall, runs_test, shapiro_wilk, MannKendallResult, RunsTestResult, ShapiroWilkResult,
};

/// Every analysis of one observation set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisReport {
    /// `None` for empty or non-finite input.
    pub summary: Option<Summary>,
    /// Interpolated 90% interval.
    pub interval: Option<ConfidenceInterval>,
    /// Nearest-rank 90% interval.
    pub interval_nearest_rank: Option<ConfidenceInterval>,
    /// Shapiro-Wilk approximation.
    pub normality: Option<ShapiroWilkResult>,
    /// Empty when fewer than 3 observations.
    pub qq_points: Vec<QqPoint>,
    /// `None` exactly when `qq_points` is empty.
    pub qq_r_squared: Option<f64>,
    /// Rating of `qq_r_squared`.
    pub qq_rating: Option<QqRating>,
    /// Mann-Kendall over recorded order.
    pub trend: Option<MannKendallResult>,
    /// Wald-Wolfowitz runs test over recorded order.
    pub runs: Option<RunsTestResult>,
}

impl AnalysisReport {
    /// Whether a significant monotonic trend or a non-random pattern was
    /// found, i.e. recorded order carries information.
    pub fn has_structure(&self) -> bool {
        let trending = self
            .trend
            .is_some_and(|t| t.trend != crate::testing::TrendDirection::NoTrend);
        let patterned = self
            .runs
            .is_some_and(|r| r.pattern != crate::testing::Pattern::Random);
        trending || patterned
    }
}

/// Runs every analysis over `data`, taken in recorded order.
pub fn analyze(data: &[f64]) -> AnalysisReport {
    let qq_points = qq_plot_data(data);
    let qq_r_squared = (!qq_points.is_empty()).then(|| qq_r_squared(&qq_points));

    let report = AnalysisReport {
        summary: summarize(data),
        interval: confidence_interval_with(
            data,
            DEFAULT_CONFIDENCE_LEVEL,
            PercentileMethod::Interpolated,
        ),
        interval_nearest_rank: confidence_interval_with(
            data,
            DEFAULT_CONFIDENCE_LEVEL,
            PercentileMethod::NearestRank,
        ),
        normality: shapiro_wilk(data),
        qq_rating: qq_r_squared.map(qq_rating),
        qq_r_squared,
        qq_points,
        trend: mann_kendall(data),
        runs: runs_test(data),
    };

    tracing::debug!(
        n = data.len(),
        normal = ?report.normality.map(|r| r.is_normal),
        structured = report.has_structure(),
        "analysis complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Pattern, TrendDirection};

    #[test]
    fn empty_input_yields_empty_report() {
        let r = analyze(&[]);
        assert!(r.summary.is_none());
        assert!(r.interval.is_none());
        assert!(r.interval_nearest_rank.is_none());
        assert!(r.normality.is_none());
        assert!(r.qq_points.is_empty());
        assert!(r.qq_r_squared.is_none());
        assert!(r.qq_rating.is_none());
        assert!(r.trend.is_none());
        assert!(r.runs.is_none());
        assert!(!r.has_structure());
    }

    #[test]
    fn small_sample_gets_partial_report() {
        // 4 observations: summary, normality and Q-Q only.
        let r = analyze(&[30.0, 28.0, 35.0, 31.0]);
        assert_eq!(r.summary.map(|s| s.count), Some(4));
        assert!(r.interval.is_none());
        assert!(r.normality.is_some());
        assert_eq!(r.qq_points.len(), 4);
        assert!(r.qq_r_squared.is_some());
        assert!(r.trend.is_none());
        assert!(r.runs.is_none());
    }

    #[test]
    fn fields_match_individual_analyses() {
        let data: Vec<f64> = (0..25).map(|i| 40.0 + ((i * 13) % 17) as f64).collect();
        let r = analyze(&data);
        assert_eq!(r.interval, crate::interval::confidence_interval(&data, 90.0));
        assert_eq!(
            r.interval_nearest_rank,
            crate::interval::confidence_interval_nearest_rank(&data, 90.0)
        );
        assert_eq!(r.normality, shapiro_wilk(&data));
        assert_eq!(r.trend, mann_kendall(&data));
        assert_eq!(r.runs, runs_test(&data));
        assert_eq!(r.qq_rating, r.qq_r_squared.map(qq_rating));
    }

    #[test]
    fn rising_durations_show_structure() {
        let data: Vec<f64> = (0..20).map(|i| 15.0 + i as f64).collect();
        let r = analyze(&data);
        assert_eq!(r.trend.map(|t| t.trend), Some(TrendDirection::Increasing));
        assert_eq!(r.runs.map(|t| t.pattern), Some(Pattern::Clustered));
        assert!(r.has_structure());
    }
}
