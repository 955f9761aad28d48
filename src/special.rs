//! Normal-distribution special functions.
//!
//! The inverse CDF and the CDF used by every test in this crate. Both are
//! fixed rational/polynomial approximations whose coefficients are part of
//! the crate's numerical contract: changing them shifts every W statistic,
//! Q-Q point and p-value downstream.
//!
//! # Examples
//!
//! ```
//! use u_duration::special::{normal_quantile, standard_normal_cdf};
//!
//! assert!(normal_quantile(0.5).abs() < 1e-12);
//! assert!((normal_quantile(0.975) - 1.959964).abs() < 1e-5);
//! assert!((standard_normal_cdf(1.959964) - 0.975).abs() < 1e-6);
//! ```

// ---------------------------------------------------------------------------
// Inverse normal CDF
// ---------------------------------------------------------------------------

// Central region, numerator (degree 5 in r = q²).
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];

// Central region, denominator.
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

// Tail regions, numerator.
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];

// Tail regions, denominator.
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

const P_LOW: f64 = 0.02425;
const P_HIGH: f64 = 1.0 - P_LOW;

/// Inverse of the standard normal CDF, Φ⁻¹(p).
///
/// # Algorithm
///
/// Three-branch rational approximation: a central region
/// `0.02425 ≤ p ≤ 0.97575` evaluated in `q = p − 0.5`, and two tail regions
/// evaluated in `q = √(−2 ln p)` (mirrored for the upper tail). Relative
/// error is below 1.15 × 10⁻⁹ over the open unit interval.
///
/// # Returns
///
/// `-∞` for `p ≤ 0`, `+∞` for `p ≥ 1`, NaN for NaN.
///
/// # References
///
/// - Acklam, P. J. (2003). "An algorithm for computing the inverse normal
///   cumulative distribution function".
/// - Moro, B. (1995). "The full Monte". Risk 8(2), 57–58.
///
/// # Examples
///
/// ```
/// use u_duration::special::normal_quantile;
///
/// assert!((normal_quantile(0.025) + 1.959964).abs() < 1e-5);
/// assert_eq!(normal_quantile(0.0), f64::NEG_INFINITY);
/// ```
pub fn normal_quantile(p: f64) -> f64 {
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail_ratio(q)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        let num = (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q;
        let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
        num / den
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail_ratio(q)
    }
}

fn tail_ratio(q: f64) -> f64 {
    let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
    let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
    num / den
}

// ---------------------------------------------------------------------------
// Error function and normal CDF
// ---------------------------------------------------------------------------

const ERF_P: f64 = 0.327_591_1;
const ERF_A: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

/// Error function, Abramowitz & Stegun formula 7.1.26.
///
/// `erf(x) ≈ 1 − (a₁t + a₂t² + a₃t³ + a₄t⁴ + a₅t⁵)·e^(−x²)`, `t = 1/(1 + px)`,
/// extended to negative `x` by oddness. Maximum absolute error 1.5 × 10⁻⁷.
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + ERF_P * x);
    let poly = ((((ERF_A[4] * t + ERF_A[3]) * t + ERF_A[2]) * t + ERF_A[1]) * t + ERF_A[0]) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard normal CDF, Φ(z) = ½·(1 + erf(z/√2)).
///
/// # Examples
///
/// ```
/// use u_duration::special::standard_normal_cdf;
///
/// assert!((standard_normal_cdf(0.0) - 0.5).abs() < 1e-7);
/// assert!(standard_normal_cdf(-8.0) < 1e-6);
/// ```
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Two-tailed p-value of a standard normal test statistic, clamped to [0, 1].
pub(crate) fn two_tailed_p(z: f64) -> f64 {
    (2.0 * (1.0 - standard_normal_cdf(z.abs()))).clamp(0.0, 1.0)
}
