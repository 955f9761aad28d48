//! Forecast-interval scoring.
//!
//! A user states an interval `[low, high]` for their next trip duration and
//! how confident they are in it (5–10). The score grades that claim against
//! the recorded durations as a sum of five non-negative penalties, rounded
//! to an integer. Lower is better.
//!
//! | Term | Penalises |
//! |---|---|
//! | precision | bounds far from the empirical 5th / 95th percentiles |
//! | miss | observations outside the interval (trimmed mean squared distance) |
//! | overcoverage | intervals covering more than 95% of observations |
//! | calibration | confidence out of line with achieved coverage |
//! | balance | unequal uncovered tails |
//!
//! The width-scaled terms grow linearly with `high − low`, so an interval
//! cannot buy coverage with width for free.
//!
//! # Examples
//!
//! ```
//! use u_duration::scoring::{compute_score, generate_checksum, verify_checksum};
//!
//! let durations: Vec<f64> = (0..40).map(|i| 25.0 + (i % 10) as f64 * 1.5).collect();
//! let score = compute_score(25.5, 37.5, &durations, 8.0);
//! let tag = generate_checksum(25.5, 37.5, score, 8.0);
//! assert!(verify_checksum(25.5, 37.5, score, 8.0, &tag));
//! ```

mod checksum;
mod penalty;

pub use checksum::{generate_checksum, verify_checksum};
pub use penalty::{IntervalScorer, ScoreBreakdown, ScoringWeights};

use crate::error::{Result, ScoringError};

/// Lowest accepted confidence.
pub const MIN_CONFIDENCE: f64 = 5.0;
/// Highest accepted confidence; claiming exactly this triggers the strict calibration check.
pub const MAX_CONFIDENCE: f64 = 10.0;

/// Rounds half toward +∞, matching the host UI's number formatting.
pub(crate) fn round_half_up(x: f64) -> f64 {
    // `x - floor(x)` is exact, unlike `x + 0.5`.
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Score of the interval `[low, high]` stated with `confidence` against
/// `data`, using the default weights.
///
/// The caller is responsible for `low < high` and `confidence ∈ [5, 10]`;
/// invalid input produces a meaningless but finite score. See
/// [`try_compute_score`] for a checked variant.
pub fn compute_score(low: f64, high: f64, data: &[f64], confidence: f64) -> i64 {
    IntervalScorer::new().score(low, high, data, confidence)
}

/// Every penalty term of [`compute_score`].
pub fn compute_score_breakdown(
    low: f64,
    high: f64,
    data: &[f64],
    confidence: f64,
) -> ScoreBreakdown {
    IntervalScorer::new().breakdown(low, high, data, confidence)
}

/// [`compute_score`] after validating its inputs.
///
/// # Errors
///
/// - [`ScoringError::NonFiniteInput`] if a bound, the confidence, or an
///   observation is NaN or infinite
/// - [`ScoringError::InvalidBounds`] unless `low < high`
/// - [`ScoringError::InvalidConfidence`] unless `5 ≤ confidence ≤ 10`
/// - [`ScoringError::EmptyObservations`] for an empty `data`
///
/// # Examples
///
/// ```
/// use u_duration::scoring::try_compute_score;
/// use u_duration::ScoringError;
///
/// let data = [30.0, 32.0, 35.0, 31.0, 33.0];
/// assert!(try_compute_score(29.0, 36.0, &data, 7.0).is_ok());
/// assert!(matches!(
///     try_compute_score(36.0, 29.0, &data, 7.0),
///     Err(ScoringError::InvalidBounds { .. })
/// ));
/// ```
pub fn try_compute_score(low: f64, high: f64, data: &[f64], confidence: f64) -> Result<i64> {
    if !low.is_finite()
        || !high.is_finite()
        || !confidence.is_finite()
        || data.iter().any(|v| !v.is_finite())
    {
        return Err(ScoringError::NonFiniteInput);
    }
    if low >= high {
        return Err(ScoringError::InvalidBounds { low, high });
    }
    if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&confidence) {
        return Err(ScoringError::InvalidConfidence(confidence));
    }
    if data.is_empty() {
        return Err(ScoringError::EmptyObservations);
    }
    Ok(compute_score(low, high, data, confidence))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn durations() -> Vec<f64> {
        // 60 trips between 18 and 47 minutes, two of each whole minute.
        (0..60).map(|i| 18.0 + (i / 2) as f64).collect()
    }

    #[test]
    fn round_half_up_matches_ui_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(7.0), 7.0);
    }

    #[test]
    fn score_is_rounded_total() {
        let data = durations();
        let b = compute_score_breakdown(20.0, 45.0, &data, 8.0);
        assert_eq!(compute_score(20.0, 45.0, &data, 8.0), round_half_up(b.total) as i64);
        assert!(b.precision >= 0.0 && b.miss >= 0.0 && b.overcoverage >= 0.0);
        assert!(b.calibration >= 0.0 && b.balance >= 0.0);
    }

    #[test]
    fn sensible_interval_beats_careless_ones() {
        let data = durations();
        let good = compute_score(19.0, 45.0, &data, 9.0);
        let too_narrow = compute_score(30.0, 34.0, &data, 9.0);
        let too_wide = compute_score(0.0, 120.0, &data, 9.0);
        assert!(good < too_narrow, "{good} vs narrow {too_narrow}");
        assert!(good < too_wide, "{good} vs wide {too_wide}");
    }

    #[test]
    fn validated_entry_point() {
        let data = durations();
        assert_eq!(
            try_compute_score(20.0, 45.0, &data, 8.0),
            Ok(compute_score(20.0, 45.0, &data, 8.0))
        );
        assert_eq!(
            try_compute_score(20.0, 20.0, &data, 8.0),
            Err(ScoringError::InvalidBounds {
                low: 20.0,
                high: 20.0
            })
        );
        assert_eq!(
            try_compute_score(20.0, 45.0, &data, 4.0),
            Err(ScoringError::InvalidConfidence(4.0))
        );
        assert_eq!(
            try_compute_score(20.0, 45.0, &data, 10.5),
            Err(ScoringError::InvalidConfidence(10.5))
        );
        assert_eq!(
            try_compute_score(20.0, 45.0, &[], 8.0),
            Err(ScoringError::EmptyObservations)
        );
        assert_eq!(
            try_compute_score(f64::NAN, 45.0, &data, 8.0),
            Err(ScoringError::NonFiniteInput)
        );
        assert_eq!(
            try_compute_score(20.0, 45.0, &[1.0, f64::INFINITY], 8.0),
            Err(ScoringError::NonFiniteInput)
        );
    }

    #[test]
    fn unvalidated_inverted_interval_does_not_panic() {
        let data = durations();
        let _ = compute_score(45.0, 20.0, &data, 8.0);
        let _ = compute_score(20.0, 45.0, &data, 42.0);
    }
}
