//! Error types for the validated scoring entry point.
//!
//! Analyses never fail: they return `None` when the data cannot support
//! them. Only [`crate::scoring::try_compute_score`], which checks its inputs
//! before scoring, reports why it refused.

use thiserror::Error;

/// Result type alias for validated scoring.
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Reasons a forecast interval cannot be scored.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// A bound, the confidence, or an observation is NaN or infinite.
    #[error("non-finite input")]
    NonFiniteInput,

    /// The interval is empty or inverted.
    #[error("invalid interval: low ({low}) must be below high ({high})")]
    InvalidBounds { low: f64, high: f64 },

    /// Confidence outside the accepted range.
    #[error("confidence {0} outside [{min}, {max}]", min = crate::scoring::MIN_CONFIDENCE, max = crate::scoring::MAX_CONFIDENCE)]
    InvalidConfidence(f64),

    /// No observations to score against.
    #[error("no observations to score against")]
    EmptyObservations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(ScoringError::NonFiniteInput.to_string(), "non-finite input");
        assert_eq!(
            ScoringError::InvalidBounds {
                low: 30.0,
                high: 20.0
            }
            .to_string(),
            "invalid interval: low (30) must be below high (20)"
        );
        assert_eq!(
            ScoringError::InvalidConfidence(11.0).to_string(),
            "confidence 11 outside [5, 10]"
        );
        assert_eq!(
            ScoringError::EmptyObservations.to_string(),
            "no observations to score against"
        );
    }
}
