//! Closed-form approximations for the standard normal distribution.
//!
//! Downstream results are validated against the Abramowitz & Stegun 7.1.26
//! rational approximation specifically, so these functions implement that
//! exact polynomial and coefficient set rather than delegating to a library
//! erf. Maximum absolute error is about 1.5e-7 over the whole real line.

/// Error function via the Abramowitz & Stegun 7.1.26 rational approximation.
///
/// Total over `f64`: `NaN` propagates, `±inf` saturate to `±1`. Never fails.
#[inline]
pub fn erf(x: f64) -> f64 {
    const A1: f64 = 0.254829592;
    const A2: f64 = -0.284496736;
    const A3: f64 = 1.421413741;
    const A4: f64 = -1.453152027;
    const A5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t) * (-x * x).exp();

    sign * y
}

/// Standard normal CDF: Φ(x) = (1 + erf(x/√2)) / 2.
///
/// Inherits the error bound and totality of [`erf`]; always returns a value
/// in `[0, 1]` for finite input (modulo the ~1.5e-7 approximation error).
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Φ(-x) = 1 - Φ(x) within the approximation's error bound.
        #[test]
        fn prop_cdf_antisymmetric(x in -50.0f64..50.0) {
            let lhs = normal_cdf(-x);
            let rhs = 1.0 - normal_cdf(x);
            prop_assert!(
                (lhs - rhs).abs() < 3e-7,
                "antisymmetry violated at x={}: Φ(-x)={}, 1-Φ(x)={}",
                x, lhs, rhs
            );
        }

        /// Φ is monotonically non-decreasing.
        #[test]
        fn prop_cdf_monotone(a in -50.0f64..50.0, b in -50.0f64..50.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                normal_cdf(hi) >= normal_cdf(lo) - 1e-9,
                "Φ({}) < Φ({})", hi, lo
            );
        }

        /// Φ stays in [0, 1] everywhere.
        #[test]
        fn prop_cdf_in_unit_interval(x in -1e6f64..1e6) {
            let phi = normal_cdf(x);
            prop_assert!((0.0..=1.0).contains(&phi), "Φ({}) = {}", x, phi);
        }
    }
}
