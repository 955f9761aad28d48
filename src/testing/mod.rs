//! Hypothesis testing.
//!
//! Normality, monotonic-trend, and randomness tests over a set of recorded
//! durations. Every test returns `None` when the sample is too small or
//! degenerate for the statistic to mean anything, so callers can always
//! render a "not enough data" state.
//!
//! # Tests
//!
//! - [`shapiro_wilk`] — correlation-based Shapiro-Wilk approximation with a
//!   critical-value table p-value
//! - [`mann_kendall`] — Mann-Kendall monotonic-trend test
//! - [`runs_test`] — Wald-Wolfowitz runs test around the median
//!
//! # Examples
//!
//! ```
//! use u_duration::testing::{mann_kendall, Significance, TrendDirection};
//!
//! let data: Vec<f64> = (1..=12).map(|i| i as f64).collect();
//! let r = mann_kendall(&data).unwrap();
//! assert_eq!(r.trend, TrendDirection::Increasing);
//! assert_eq!(r.significance, Significance::Strong);
//! ```

mod normality;
mod runs;
mod trend;

pub use normality::{shapiro_wilk, ShapiroWilkResult, MIN_NORMALITY_SAMPLES};
pub use runs::{runs_test, Pattern, RunsTestResult, MIN_RUNS_SAMPLES};
pub use trend::{mann_kendall, MannKendallResult, TrendDirection, MIN_TREND_SAMPLES};

/// Significance level a two-tailed p-value reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Significance {
    /// p ≥ 0.10.
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    NotSignificant,
    /// 0.05 ≤ p < 0.10.
    Weak,
    /// 0.01 ≤ p < 0.05.
    Moderate,
    /// p < 0.01.
    Strong,
}

impl Significance {
    /// Buckets a p-value: `< 0.01` strong, `< 0.05` moderate, `< 0.10` weak.
    pub fn from_p_value(p: f64) -> Self {
        if p < 0.01 {
            Self::Strong
        } else if p < 0.05 {
            Self::Moderate
        } else if p < 0.10 {
            Self::Weak
        } else {
            Self::NotSignificant
        }
    }

    /// Lowercase display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::NotSignificant => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn significance_buckets() {
        assert_eq!(Significance::from_p_value(0.001), Significance::Strong);
        assert_eq!(Significance::from_p_value(0.01), Significance::Moderate);
        assert_eq!(Significance::from_p_value(0.049), Significance::Moderate);
        assert_eq!(Significance::from_p_value(0.05), Significance::Weak);
        assert_eq!(Significance::from_p_value(0.099), Significance::Weak);
        assert_eq!(Significance::from_p_value(0.10), Significance::NotSignificant);
        assert_eq!(Significance::from_p_value(1.0), Significance::NotSignificant);
    }

    #[test]
    fn significance_orders_by_strength() {
        assert!(Significance::Strong > Significance::Moderate);
        assert!(Significance::Weak > Significance::NotSignificant);
        assert_eq!(Significance::NotSignificant.label(), "none");
    }
}
