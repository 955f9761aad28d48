//! Penalty terms of the interval score.

use crate::descriptive::sorted_copy;

use super::{round_half_up, MAX_CONFIDENCE};

/// Coverage (percent) the host's 90% intervals aim for.
const TARGET_COVERAGE: f64 = 90.0;
/// Per-tail share (percent) outside a well-placed interval.
const TARGET_TAIL: f64 = 5.0;
/// Coverage above which a wide interval is penalised.
const OVERCOVERAGE_THRESHOLD: f64 = 95.0;
/// Maximum-confidence claims must land within these tolerances (percent).
const STRICT_COVERAGE_TOLERANCE: f64 = 1.0;
const STRICT_IMBALANCE_TOLERANCE: f64 = 2.0;

/// Multipliers applied to the width-scaled penalty terms.
///
/// The defaults reproduce [`super::compute_score`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoringWeights {
    /// Overcoverage multiplier, default 0.5.
    pub overcoverage: f64,
    /// Calibration multiplier, default 2.0.
    pub calibration: f64,
    /// Calibration multiplier for unearned maximum confidence, default 3.0.
    pub strict_calibration: f64,
    /// Tail-balance multiplier, default 1.0.
    pub balance: f64,
    /// Share of the smallest miss distances ignored, default 0.1.
    pub miss_trim: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            overcoverage: 0.5,
            calibration: 2.0,
            strict_calibration: 3.0,
            balance: 1.0,
            miss_trim: 0.1,
        }
    }
}

/// The five additive penalty terms of an interval score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Squared distance of the bounds from the empirical 5th/95th percentiles.
    pub precision: f64,
    /// Trimmed mean squared distance of uncovered observations.
    pub miss: f64,
    /// Penalty for covering more than 95% of observations.
    pub overcoverage: f64,
    /// Mismatch between stated confidence and achieved coverage.
    pub calibration: f64,
    /// Asymmetry of the two uncovered tails.
    pub balance: f64,
    /// Unrounded sum of the five terms.
    pub total: f64,
}

impl ScoreBreakdown {
    /// The integer score, `total` rounded half up. Lower is better.
    pub fn score(&self) -> i64 {
        round_half_up(self.total) as i64
    }
}

/// Scores forecast intervals against observed durations.
///
/// # Examples
///
/// ```
/// use u_duration::scoring::{IntervalScorer, ScoringWeights};
///
/// let data: Vec<f64> = (1..=40).map(|i| 20.0 + i as f64 * 0.5).collect();
/// let scorer = IntervalScorer::new();
/// let b = scorer.breakdown(21.0, 39.5, &data, 7.0);
/// assert_eq!(b.score(), u_duration::scoring::compute_score(21.0, 39.5, &data, 7.0));
///
/// let lenient = ScoringWeights { balance: 0.0, ..ScoringWeights::default() };
/// assert!(IntervalScorer::with_weights(lenient).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntervalScorer {
    weights: ScoringWeights,
}

impl IntervalScorer {
    /// Scorer with the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with custom weights.
    ///
    /// # Returns
    ///
    /// `None` if any multiplier is negative or non-finite, or `miss_trim`
    /// is outside `[0, 1)`.
    pub fn with_weights(weights: ScoringWeights) -> Option<Self> {
        let multipliers = [
            weights.overcoverage,
            weights.calibration,
            weights.strict_calibration,
            weights.balance,
        ];
        if multipliers.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return None;
        }
        if !(0.0..1.0).contains(&weights.miss_trim) {
            return None;
        }
        Some(Self { weights })
    }

    /// Weights in effect.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Computes every penalty term for the interval `[low, high]` stated
    /// with `confidence` (5–10) against `data`.
    ///
    /// Inputs are not validated; an empty observation set yields all-zero
    /// terms.
    pub fn breakdown(&self, low: f64, high: f64, data: &[f64], confidence: f64) -> ScoreBreakdown {
        if data.is_empty() {
            return ScoreBreakdown::default();
        }

        let sorted = sorted_copy(data);
        let n = sorted.len();
        let nf = n as f64;
        let width = high - low;

        // Precision: index-floor 5th/95th percentiles.
        let p5 = sorted[floor_index(n, 0.05)];
        let p95 = sorted[floor_index(n, 0.95)];
        let precision = (low - p5).powi(2) + (high - p95).powi(2);

        // Miss: squared distance to the nearer bound, smallest share dropped.
        let mut below = 0_usize;
        let mut above = 0_usize;
        let mut misses = Vec::new();
        for &x in &sorted {
            if x < low {
                below += 1;
                misses.push((low - x).powi(2));
            } else if x > high {
                above += 1;
                misses.push((x - high).powi(2));
            }
        }
        misses.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let dropped = (misses.len() as f64 * self.weights.miss_trim).floor() as usize;
        let miss = misses[dropped..].iter().sum::<f64>() / nf;

        let pct_below = below as f64 / nf * 100.0;
        let pct_above = above as f64 / nf * 100.0;
        let pct_outside = pct_below + pct_above;
        let coverage = 100.0 - pct_outside;

        let overcoverage = if coverage > OVERCOVERAGE_THRESHOLD {
            ((coverage - TARGET_COVERAGE) / 10.0).powi(2) * width * self.weights.overcoverage
        } else {
            0.0
        };

        let ideal_confidence = (10.0 - (pct_outside - 10.0).abs() / 10.0).max(5.0);
        let coverage_deviation = (coverage - TARGET_COVERAGE).abs();
        let tail_imbalance = (pct_below - pct_above).abs();
        let calibration = if confidence == MAX_CONFIDENCE
            && (coverage_deviation > STRICT_COVERAGE_TOLERANCE
                || tail_imbalance > STRICT_IMBALANCE_TOLERANCE)
        {
            ((coverage_deviation + tail_imbalance) / 5.0).powi(2)
                * width
                * self.weights.strict_calibration
        } else {
            ((confidence - ideal_confidence) / 5.0).powi(2) * width * self.weights.calibration
        };

        let balance = (((pct_below - TARGET_TAIL).abs() + (pct_above - TARGET_TAIL).abs()) / 10.0)
            .powi(2)
            * width
            * self.weights.balance;

        let total = precision + miss + overcoverage + calibration + balance;
        tracing::trace!(
            n,
            precision,
            miss,
            overcoverage,
            calibration,
            balance,
            total,
            "interval scored"
        );

        ScoreBreakdown {
            precision,
            miss,
            overcoverage,
            calibration,
            balance,
            total,
        }
    }

    /// Integer score of the interval. Lower is better.
    pub fn score(&self, low: f64, high: f64, data: &[f64], confidence: f64) -> i64 {
        self.breakdown(low, high, data, confidence).score()
    }
}

fn floor_index(n: usize, fraction: f64) -> usize {
    ((n as f64 * fraction).floor() as usize).min(n - 1)
}
