//! Shapiro-Wilk normality approximation.
//!
//! # Algorithm
//!
//! 1. Sort; S² = Σ(xᵢ − x̄)². S² = 0 is reported as perfectly normal.
//! 2. Expected normal order statistics (Blom): mᵢ = Φ⁻¹((i − 0.375)/(n + 0.25)).
//! 3. W = (Σ mᵢ x₍ᵢ₎)² / (Σ mᵢ² · S²), the squared correlation between the
//!    order statistics and their normal scores. Σ mᵢ = 0, so the sum is
//!    taken over centred values.
//! 4. p-value: banded linear interpolation between the critical values of
//!    the nearest tabulated sample size.
//!
//! This is the Shapiro-Francia flavour of W with a table lookup, not
//! Royston's AS R94. Downstream scoring thresholds are calibrated against
//! this exact approximation.
//!
//! # References
//!
//! - Shapiro & Wilk (1965). "An analysis of variance test for normality".
//!   Biometrika, 52(3–4), 591–611.
//! - Shapiro & Francia (1972). "An approximate analysis of variance test
//!   for normality". JASA, 67(337), 215–216.

use crate::descriptive::sorted_copy;
use crate::special::normal_quantile;

/// Fewest observations for which W is defined.
pub const MIN_NORMALITY_SAMPLES: usize = 3;

/// How far the raw W may leave [0, 1] before the result is discarded.
const W_TOLERANCE: f64 = 0.01;

/// Result of the Shapiro-Wilk normality approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapiroWilkResult {
    /// W statistic in [0, 1]. Values close to 1 suggest normality.
    pub w: f64,
    /// Table-interpolated p-value in [0, 1].
    pub p_value: f64,
    /// `p_value > 0.05`.
    pub is_normal: bool,
}

/// Critical W values for one sample size at nominal α = 0.01, 0.05, 0.10.
#[derive(Debug, Clone, Copy)]
struct CriticalRow {
    n: usize,
    w01: f64,
    w05: f64,
    w10: f64,
}

const fn row(n: usize, w01: f64, w05: f64, w10: f64) -> CriticalRow {
    CriticalRow { n, w01, w05, w10 }
}

// Sorted by n, one row every 5 observations.
//
// n ≤ 50: Shapiro & Wilk (1965), Table 6.
// n ≥ 55: Royston (1992) normalising transform of W, u = ln n,
//   μ = 0.0038915u³ − 0.083751u² − 0.31082u − 1.5861,
//   σ = exp(0.0030302u² − 0.082676u − 0.4803),
//   W_α = 1 − exp(μ + σ·Φ⁻¹(1 − α)), rounded to 3 decimals.
static CRITICAL_VALUES: [CriticalRow; 47] = [
    row(20, 0.868, 0.905, 0.920),
    row(25, 0.888, 0.918, 0.931),
    row(30, 0.900, 0.927, 0.939),
    row(35, 0.910, 0.934, 0.944),
    row(40, 0.919, 0.940, 0.948),
    row(45, 0.926, 0.945, 0.951),
    row(50, 0.930, 0.947, 0.955),
    row(55, 0.942, 0.958, 0.964),
    row(60, 0.946, 0.961, 0.967),
    row(65, 0.949, 0.963, 0.969),
    row(70, 0.953, 0.965, 0.971),
    row(75, 0.955, 0.967, 0.972),
    row(80, 0.958, 0.969, 0.974),
    row(85, 0.960, 0.971, 0.975),
    row(90, 0.962, 0.972, 0.976),
    row(95, 0.964, 0.973, 0.977),
    row(100, 0.965, 0.975, 0.978),
    row(105, 0.967, 0.976, 0.979),
    row(110, 0.968, 0.977, 0.980),
    row(115, 0.970, 0.978, 0.981),
    row(120, 0.971, 0.978, 0.982),
    row(125, 0.972, 0.979, 0.982),
    row(130, 0.973, 0.980, 0.983),
    row(135, 0.974, 0.980, 0.983),
    row(140, 0.974, 0.981, 0.984),
    row(145, 0.975, 0.982, 0.984),
    row(150, 0.976, 0.982, 0.985),
    row(155, 0.977, 0.983, 0.985),
    row(160, 0.977, 0.983, 0.986),
    row(165, 0.978, 0.984, 0.986),
    row(170, 0.979, 0.984, 0.986),
    row(175, 0.979, 0.985, 0.987),
    row(180, 0.980, 0.985, 0.987),
    row(185, 0.980, 0.985, 0.987),
    row(190, 0.981, 0.986, 0.988),
    row(195, 0.981, 0.986, 0.988),
    row(200, 0.982, 0.986, 0.988),
    row(205, 0.982, 0.987, 0.989),
    row(210, 0.982, 0.987, 0.989),
    row(215, 0.983, 0.987, 0.989),
    row(220, 0.983, 0.987, 0.989),
    row(225, 0.983, 0.988, 0.989),
    row(230, 0.984, 0.988, 0.990),
    row(235, 0.984, 0.988, 0.990),
    row(240, 0.984, 0.988, 0.990),
    row(245, 0.985, 0.989, 0.990),
    row(250, 0.985, 0.989, 0.990),
];

/// Row whose sample size is closest to `n`; ties go to the smaller size.
fn nearest_row(n: usize) -> &'static CriticalRow {
    let mut best = &CRITICAL_VALUES[0];
    for r in CRITICAL_VALUES.iter().skip(1) {
        if r.n.abs_diff(n) < best.n.abs_diff(n) {
            best = r;
        }
    }
    best
}

/// Maps W onto a continuous pseudo-p-value through the row's critical values.
fn table_p_value(w: f64, n: usize) -> f64 {
    let r = nearest_row(n);
    let p = if w < r.w01 {
        0.01 * w / r.w01
    } else if w < r.w05 {
        0.01 + 0.04 * (w - r.w01) / (r.w05 - r.w01)
    } else if w < r.w10 {
        0.05 + 0.05 * (w - r.w05) / (r.w10 - r.w05)
    } else {
        0.10 + 0.90 * (w - r.w10) / (1.0 - r.w10)
    };
    p.clamp(0.0, 1.0)
}

/// Shapiro-Wilk normality test: H₀: the durations are normally distributed.
///
/// # Returns
///
/// `None` if fewer than 3 observations, non-finite values, or the raw W
/// drifts more than 0.01 outside [0, 1]. All-equal data yields
/// `W = 1, p = 1`.
///
/// # Examples
///
/// ```
/// use u_duration::testing::shapiro_wilk;
///
/// let r = shapiro_wilk(&[50.0; 20]).unwrap();
/// assert_eq!(r.w, 1.0);
/// assert!(r.is_normal);
///
/// let mut bimodal = vec![20.0; 25];
/// bimodal.extend(vec![80.0; 25]);
/// let r = shapiro_wilk(&bimodal).unwrap();
/// assert!(r.w < 0.9);
/// assert!(!r.is_normal);
/// ```
pub fn shapiro_wilk(data: &[f64]) -> Option<ShapiroWilkResult> {
    let n = data.len();
    if n < MIN_NORMALITY_SAMPLES {
        tracing::debug!(n, "normality test unavailable: too few observations");
        return None;
    }
    if data.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let x = sorted_copy(data);
    let nf = n as f64;
    let mean = x.iter().sum::<f64>() / nf;
    let ss: f64 = x.iter().map(|&v| (v - mean).powi(2)).sum();

    // Equal endpoints catch constant data whose mean picked up rounding.
    if ss == 0.0 || x[n - 1] == x[0] {
        return Some(ShapiroWilkResult {
            w: 1.0,
            p_value: 1.0,
            is_normal: true,
        });
    }

    let mut sum_mx = 0.0;
    let mut sum_m2 = 0.0;
    for (i, &xi) in x.iter().enumerate() {
        let m = normal_quantile((i as f64 + 1.0 - 0.375) / (nf + 0.25));
        sum_mx += m * (xi - mean);
        sum_m2 += m * m;
    }

    let raw = (sum_mx * sum_mx) / (sum_m2 * ss);
    let w = raw.clamp(0.0, 1.0);
    if !raw.is_finite() || (raw - w).abs() > W_TOLERANCE {
        tracing::warn!(n, raw_w = raw, "Shapiro-Wilk statistic outside [0, 1]; discarding");
        return None;
    }

    let p_value = table_p_value(w, n);
    Some(ShapiroWilkResult {
        w,
        p_value,
        is_normal: p_value > 0.05,
    })
}
