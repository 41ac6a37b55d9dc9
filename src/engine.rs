//! The detectability engine: a pure transform from four experiment
//! parameters to a [`Metrics`] record.
//!
//! The engine is total over the `f64` domain. It performs no input
//! validation and no clamping: degenerate inputs flow through the
//! arithmetic literally and surface as IEEE-754 sentinels (`NaN`, `±inf`)
//! in the output record. Range validation, where wanted, is a boundary
//! concern — see [`ExperimentParams::validate`](crate::ExperimentParams::validate).

use crate::math::normal_cdf;
use crate::report::Metrics;

/// Detection threshold policy: the threshold sits at this many multiples of
/// the noise floor. Fixed by the reference methodology.
///
/// Note that because the threshold is always `THRESHOLD_SIGMA * sigma_min`,
/// the false positive rate `1 - Φ(threshold / sigma_min)` reduces to the
/// constant `1 - Φ(2) ≈ 0.0228` whenever `sigma_min` is finite and nonzero.
/// The formula is kept in its general form so results match the reference
/// methodology bit-for-bit, including its sentinel behavior.
pub const THRESHOLD_SIGMA: f64 = 2.0;

/// Compute detectability metrics for an experiment design.
///
/// Inputs:
/// - `num_features` (p): count of measured variables.
/// - `num_samples` (N): count of independent observations.
/// - `background_variance` (σ): irreducible per-measurement noise scale.
/// - `expected_effect` (δ): true signal magnitude the experiment targets.
///
/// The derivation runs in a fixed order for floating-point
/// reproducibility: dimensionality ratio γ = p/N, noise floor
/// σ_min = σ·γ^¼, threshold = 2·σ_min, then the two CDF evaluations for
/// the error rates.
///
/// # Degenerate inputs
///
/// `num_samples = 0` yields a non-finite `gamma` (`inf` or `NaN`), which
/// propagates into every downstream field per IEEE-754 semantics. Negative
/// or zero inputs are likewise applied literally (a negative `gamma` makes
/// `sigma_min` `NaN` through the fractional power). This function never
/// panics.
///
/// Calling twice with identical inputs yields bit-identical output.
///
/// ```
/// let m = detlim::compute(20_000.0, 200.0, 0.2, 0.1);
/// assert_eq!(m.gamma, 100.0);
/// assert!(m.is_high_dimensional);
/// assert!(!m.is_detectable);
/// ```
pub fn compute(
    num_features: f64,
    num_samples: f64,
    background_variance: f64,
    expected_effect: f64,
) -> Metrics {
    let gamma = num_features / num_samples;
    let sigma_min = background_variance * gamma.powf(0.25);
    let threshold = THRESHOLD_SIGMA * sigma_min;
    let z_score = expected_effect / sigma_min;
    let false_positive_rate = 1.0 - normal_cdf(threshold / sigma_min);
    let false_negative_rate = normal_cdf((threshold - expected_effect) / sigma_min);
    let power = 1.0 - false_negative_rate;

    Metrics {
        gamma,
        sigma_min,
        threshold,
        z_score,
        false_positive_rate,
        false_negative_rate,
        power,
        is_high_dimensional: gamma > 1.0,
        is_detectable: expected_effect > threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exact_multiple_of_noise_floor() {
        for (p, n) in [(100.0, 1000.0), (20_000.0, 200.0), (500.0, 500.0)] {
            let m = compute(p, n, 0.2, 0.1);
            assert_eq!(m.threshold, THRESHOLD_SIGMA * m.sigma_min);
        }
    }

    #[test]
    fn gamma_of_one_is_not_high_dimensional() {
        let m = compute(500.0, 500.0, 0.2, 0.1);
        assert_eq!(m.gamma, 1.0);
        assert!(!m.is_high_dimensional);
    }

    #[test]
    fn false_positive_rate_is_constant_by_construction() {
        let a = compute(20_000.0, 200.0, 0.05, 0.01);
        let b = compute(100.0, 100_000.0, 0.5, 0.5);
        assert_eq!(a.false_positive_rate, b.false_positive_rate);
        assert!((a.false_positive_rate - 0.02275).abs() < 1e-5);
    }
}
