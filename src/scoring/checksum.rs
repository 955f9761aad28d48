//! Tamper-evidence checksum for a submitted score.
//!
//! The host application stores and displays `(low, high, score, confidence)`
//! alongside this 8-hex-digit tag. It is a rolling `h·31 + c` string hash,
//! not a cryptographic MAC: it detects accidental edits and casual
//! tampering only.

use super::round_half_up;

fn payload(low: f64, high: f64, score: i64, confidence: f64) -> String {
    format!(
        "{}-{}-{}-{}",
        round_half_up(low) as i64,
        round_half_up(high) as i64,
        score,
        round_half_up(confidence) as i64
    )
}

fn rolling_hash(s: &str) -> i32 {
    s.bytes()
        .fold(0_i32, |h, b| h.wrapping_mul(31).wrapping_add(i32::from(b)))
}

/// Checksum of a scored submission as 8 uppercase hex digits.
///
/// Bounds and confidence are rounded half up before hashing, so values that
/// display identically share a checksum.
///
/// # Examples
///
/// ```
/// use u_duration::scoring::{generate_checksum, verify_checksum};
///
/// let tag = generate_checksum(24.6, 41.2, 137, 8.0);
/// assert_eq!(tag.len(), 8);
/// assert!(verify_checksum(24.6, 41.2, 137, 8.0, &tag));
/// assert!(verify_checksum(24.6, 41.2, 137, 8.0, &tag.to_lowercase()));
/// assert!(!verify_checksum(24.6, 41.2, 136, 8.0, &tag));
/// ```
pub fn generate_checksum(low: f64, high: f64, score: i64, confidence: f64) -> String {
    let hash = rolling_hash(&payload(low, high, score, confidence));
    format!("{:08X}", hash as u32)
}

/// Whether `checksum` matches the submission, ignoring ASCII case.
pub fn verify_checksum(low: f64, high: f64, score: i64, confidence: f64, checksum: &str) -> bool {
    generate_checksum(low, high, score, confidence).eq_ignore_ascii_case(checksum)
}
