//! Mann-Kendall monotonic-trend test.
//!
//! Reads the observations in recorded order: a drift in commute times over
//! successive trips is exactly what this test detects.
//!
//! # References
//!
//! - Mann (1945), "Nonparametric tests against trend". Econometrica 13, 245–259.
//! - Kendall (1975), "Rank Correlation Methods". Griffin, London.

use super::Significance;
use crate::special::two_tailed_p;

/// Fewest observations for which the trend test is reported.
pub const MIN_TREND_SAMPLES: usize = 10;

/// Direction of a significant monotonic trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    /// No trend at the 5% level.
    NoTrend,
}

impl TrendDirection {
    /// Display label: `increasing`, `decreasing` or `no-trend`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::NoTrend => "no-trend",
        }
    }
}

/// Result of the Mann-Kendall trend test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MannKendallResult {
    /// S = Σᵢ<ⱼ sign(xⱼ − xᵢ): concordant minus discordant pairs.
    pub s: i64,
    /// Kendall's tau, 2S / (n(n−1)), in [-1, 1].
    pub tau: f64,
    /// Continuity-corrected z.
    pub z_score: f64,
    /// Two-tailed p-value.
    pub p_value: f64,
    /// Direction when p < 0.05, otherwise no trend.
    pub trend: TrendDirection,
    /// Bucketed `p_value`.
    pub significance: Significance,
}

/// Mann-Kendall test: H₀: no monotonic trend.
///
/// # Algorithm
///
/// 1. S = Σᵢ<ⱼ sign(xⱼ − xᵢ) by a full pairwise scan
/// 2. Var(S) = n(n−1)(2n+5)/18 (no tie correction)
/// 3. z = (S−1)/√Var if S > 1, (S+1)/√Var if S < −1, S/√Var otherwise
/// 4. p = 2(1 − Φ(|z|))
///
/// A direction is reported only when p < 0.05.
///
/// # Complexity
///
/// O(n²) time, O(1) extra space. Callers with very long histories should
/// run this off their UI thread.
///
/// # Returns
///
/// `None` if fewer than 10 observations or non-finite values.
///
/// # Examples
///
/// ```
/// use u_duration::testing::{mann_kendall, TrendDirection};
///
/// let data = [31.0, 30.0, 29.5, 28.0, 27.2, 26.9, 25.0, 24.1, 23.8, 22.0];
/// let r = mann_kendall(&data).unwrap();
/// assert!(r.s < 0);
/// assert_eq!(r.trend, TrendDirection::Decreasing);
/// ```
pub fn mann_kendall(data: &[f64]) -> Option<MannKendallResult> {
    let n = data.len();
    if n < MIN_TREND_SAMPLES {
        tracing::debug!(n, "trend test unavailable: too few observations");
        return None;
    }
    if data.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let mut s: i64 = 0;
    for i in 0..n - 1 {
        for j in (i + 1)..n {
            let diff = data[j] - data[i];
            if diff > 0.0 {
                s += 1;
            } else if diff < 0.0 {
                s -= 1;
            }
        }
    }

    let nf = n as f64;
    let tau = 2.0 * s as f64 / (nf * (nf - 1.0));
    let variance = nf * (nf - 1.0) * (2.0 * nf + 5.0) / 18.0;
    let sigma = variance.sqrt();

    let z_score = if s > 1 {
        (s - 1) as f64 / sigma
    } else if s < -1 {
        (s + 1) as f64 / sigma
    } else {
        s as f64 / sigma
    };

    let p_value = two_tailed_p(z_score);
    let trend = if p_value < 0.05 {
        if s > 0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    } else {
        TrendDirection::NoTrend
    };

    Some(MannKendallResult {
        s,
        tau,
        z_score,
        p_value,
        trend,
        significance: Significance::from_p_value(p_value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_observations() {
        let data: Vec<f64> = (0..9).map(|i| i as f64).collect();
        assert!(mann_kendall(&data).is_none());
        assert!(mann_kendall(&[1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]).is_none());
    }

    #[test]
    fn strictly_increasing() {
        let data: Vec<f64> = (1..=10).map(|i| i as f64 * 3.0).collect();
        let r = mann_kendall(&data).expect("should compute");
        assert_eq!(r.s, 45);
        assert!((r.tau - 1.0).abs() < 1e-12);
        // Var(S) = 10·9·25/18 = 125; z = 44/√125
        assert!((r.z_score - 44.0 / 125.0_f64.sqrt()).abs() < 1e-12);
        assert!(r.p_value < 0.05, "p = {}", r.p_value);
        assert_eq!(r.trend, TrendDirection::Increasing);
        assert_eq!(r.significance, Significance::Strong);
    }

    #[test]
    fn strictly_decreasing_mirrors_increasing() {
        let up: Vec<f64> = (1..=15).map(|i| i as f64).collect();
        let down: Vec<f64> = up.iter().rev().copied().collect();
        let ru = mann_kendall(&up).expect("should compute");
        let rd = mann_kendall(&down).expect("should compute");
        assert_eq!(ru.s, -rd.s);
        assert!((ru.z_score + rd.z_score).abs() < 1e-12);
        assert!((ru.p_value - rd.p_value).abs() < 1e-12);
        assert_eq!(rd.trend, TrendDirection::Decreasing);
    }

    #[test]
    fn constant_series_has_no_trend() {
        let r = mann_kendall(&[12.0; 20]).expect("should compute");
        assert_eq!(r.s, 0);
        assert_eq!(r.z_score, 0.0);
        assert!((r.p_value - 1.0).abs() < 1e-6);
        assert_eq!(r.trend, TrendDirection::NoTrend);
        assert_eq!(r.significance, Significance::NotSignificant);
    }

    #[test]
    fn small_s_skips_continuity_correction() {
        // Ten values whose only discordance cancels to S = 1.
        let data = [1.0, 0.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0];
        let r = mann_kendall(&data).expect("should compute");
        // pairs: (1,0) −1; 1→2 ×8 +8; 0→2 ×8 +8; 2→2 ties 0 ⇒ S = 15
        assert_eq!(r.s, 15);

        let data = [5.0, 4.0, 6.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0];
        let r = mann_kendall(&data).expect("should compute");
        // 5: −1 +1 = 0 plus ties; 4: +1 +1×7 = 8; 6: −1×7 = −7 ⇒ S = 1
        assert_eq!(r.s, 1);
        assert!((r.z_score - 1.0 / 125.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn oscillation_is_not_a_trend() {
        let data: Vec<f64> = (0..30).map(|i| if i % 2 == 0 { 10.0 } else { 20.0 }).collect();
        let r = mann_kendall(&data).expect("should compute");
        assert_eq!(r.trend, TrendDirection::NoTrend);
    }
}
