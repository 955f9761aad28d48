//! Wald-Wolfowitz runs test around the median.
//!
//! Each observation (in recorded order) is labelled above or not above the
//! sample median; a run is a maximal block of equal labels. Too few runs
//! means slow and fast periods cluster together, too many means they
//! alternate.
//!
//! # References
//!
//! - Wald & Wolfowitz (1940). "On a test whether two samples are from the
//!   same population". Annals of Mathematical Statistics, 11(2), 147–162.

use super::Significance;
use crate::descriptive::try_median;
use crate::special::two_tailed_p;

/// Fewest observations for which the runs test is reported.
pub const MIN_RUNS_SAMPLES: usize = 10;

/// Shape of the sequence relative to randomness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pattern {
    /// Consistent with a random ordering.
    Random,
    /// Significantly fewer runs than expected.
    Clustered,
    /// Significantly more runs than expected.
    Oscillating,
}

impl Pattern {
    /// Lowercase display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Clustered => "clustered",
            Self::Oscillating => "oscillating",
        }
    }
}

/// Result of the runs test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunsTestResult {
    /// Observed number of runs (≥ 2 when defined).
    pub runs: usize,
    /// 2n₁n₂/(n₁+n₂) + 1.
    pub expected_runs: f64,
    /// Continuity-corrected z.
    pub z_score: f64,
    /// Two-tailed p-value.
    pub p_value: f64,
    /// Random unless p < 0.05, then the side of E[R] the runs fall on.
    pub pattern: Pattern,
    /// Bucketed `p_value`.
    pub significance: Significance,
}

/// Runs test for randomness: H₀: the above/below-median labels occur in
/// random order.
///
/// # Algorithm
///
/// 1. Label xᵢ > median as "above", everything else as "below"
/// 2. n₁ = #above, n₂ = #below; R = number of runs
/// 3. E[R] = 2n₁n₂/(n₁+n₂) + 1,
///    Var[R] = 2n₁n₂(2n₁n₂ − n₁ − n₂) / ((n₁+n₂)²(n₁+n₂−1))
/// 4. z = (R − E[R] ∓ 0.5)/√Var (correction toward E[R]; 0 if R = E[R])
///
/// # Returns
///
/// `None` if fewer than 10 observations, non-finite values, or every
/// observation falls on one side of the median.
///
/// # Examples
///
/// ```
/// use u_duration::testing::{runs_test, Pattern};
///
/// let alternating: Vec<f64> = (0..20).map(|i| if i % 2 == 0 { 12.0 } else { 30.0 }).collect();
/// let r = runs_test(&alternating).unwrap();
/// assert_eq!(r.pattern, Pattern::Oscillating);
/// assert!(r.runs as f64 > r.expected_runs);
/// ```
pub fn runs_test(data: &[f64]) -> Option<RunsTestResult> {
    let n = data.len();
    if n < MIN_RUNS_SAMPLES {
        tracing::debug!(n, "runs test unavailable: too few observations");
        return None;
    }
    let median = try_median(data)?;

    let above: Vec<bool> = data.iter().map(|&v| v > median).collect();
    let n1 = above.iter().filter(|&&a| a).count();
    let n2 = n - n1;
    if n1 == 0 || n2 == 0 {
        tracing::debug!(n, "runs test unavailable: all observations on one side of the median");
        return None;
    }

    let runs = 1 + above.windows(2).filter(|w| w[0] != w[1]).count();

    let n1f = n1 as f64;
    let n2f = n2 as f64;
    let total = n1f + n2f;
    let product = 2.0 * n1f * n2f;
    let expected_runs = product / total + 1.0;
    let variance = product * (product - n1f - n2f) / (total * total * (total - 1.0));

    let r = runs as f64;
    let correction = if r > expected_runs {
        -0.5
    } else if r < expected_runs {
        0.5
    } else {
        0.0
    };
    let z_score = if variance > 0.0 {
        (r - expected_runs + correction) / variance.sqrt()
    } else {
        0.0
    };

    let p_value = two_tailed_p(z_score);
    let pattern = if p_value < 0.05 && r < expected_runs {
        Pattern::Clustered
    } else if p_value < 0.05 && r > expected_runs {
        Pattern::Oscillating
    } else {
        Pattern::Random
    };

    Some(RunsTestResult {
        runs,
        expected_runs,
        z_score,
        p_value,
        pattern,
        significance: Significance::from_p_value(p_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_observations() {
        let data = [1.0, 9.0, 1.0, 9.0, 1.0, 9.0, 1.0, 9.0, 1.0];
        assert!(runs_test(&data).is_none());
    }

    #[test]
    fn constant_series_unavailable() {
        assert!(runs_test(&[7.0; 15]).is_none());
    }

    #[test]
    fn alternating_is_oscillating() {
        let data: Vec<f64> = (0..20).map(|i| if i % 2 == 0 { 10.0 } else { 40.0 }).collect();
        let r = runs_test(&data).expect("should compute");
        assert_eq!(r.runs, 20);
        assert!((r.expected_runs - 11.0).abs() < 1e-12);
        assert!(r.runs as f64 > r.expected_runs);
        assert!(r.z_score > 0.0);
        assert_eq!(r.pattern, Pattern::Oscillating);
        assert_eq!(r.significance, Significance::Strong);
    }

    #[test]
    fn blocked_is_clustered() {
        let mut data = vec![10.0; 10];
        data.extend(vec![40.0; 10]);
        let r = runs_test(&data).expect("should compute");
        assert_eq!(r.runs, 2);
        assert!((r.runs as f64) < r.expected_runs);
        assert!(r.z_score < 0.0);
        assert_eq!(r.pattern, Pattern::Clustered);
    }

    #[test]
    fn variance_and_correction() {
        // n₁ = n₂ = 10: E = 11, Var = 200·180 / (400·19)
        let mut data = vec![10.0; 10];
        data.extend(vec![40.0; 10]);
        let r = runs_test(&data).expect("should compute");
        let sd = (200.0_f64 * 180.0 / (400.0 * 19.0)).sqrt();
        assert!((r.z_score - (2.0 - 11.0 + 0.5) / sd).abs() < 1e-12);
    }

    #[test]
    fn runs_at_expectation_give_zero_z() {
        // Median 5.5 splits 5/5: E = 6. Labels L L H H L H L L H H → 6 runs.
        let data = [1.0, 2.0, 9.0, 8.0, 3.0, 7.0, 4.0, 5.0, 6.0, 10.0];
        let r = runs_test(&data).expect("should compute");
        assert_eq!(r.runs, 6);
        assert!((r.expected_runs - 6.0).abs() < 1e-12);
        assert_eq!(r.z_score, 0.0);
        assert!((r.p_value - 1.0).abs() < 1e-7);
        assert_eq!(r.pattern, Pattern::Random);
        assert_eq!(r.significance, Significance::NotSignificant);
    }

    #[test]
    fn ties_at_median_count_as_below() {
        // Median is 5; the three 5s join the "below" side.
        let data = [1.0, 5.0, 9.0, 5.0, 2.0, 8.0, 5.0, 3.0, 7.0, 6.0, 4.0];
        let r = runs_test(&data).expect("should compute");
        // labels: F F T F F T F F T T F → runs: FF|T|FF|T|FF|TT|F = 7
        assert_eq!(r.runs, 7);
    }

    #[test]
    fn irregular_sequence_is_random() {
        let data = [
            23.0, 31.0, 27.0, 19.0, 35.0, 22.0, 28.0, 30.0, 18.0, 26.0, 33.0, 21.0, 29.0, 24.0,
            32.0, 20.0,
        ];
        let r = runs_test(&data).expect("should compute");
        assert_eq!(r.pattern, Pattern::Random);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn p_bounded_and_runs_positive(
            data in proptest::collection::vec(0.0_f64..1e3, 10..=80)
        ) {
            if let Some(r) = runs_test(&data) {
                prop_assert!(r.runs >= 2 && r.runs <= data.len());
                prop_assert!((0.0..=1.0).contains(&r.p_value), "p = {}", r.p_value);
            }
        }
    }
}
