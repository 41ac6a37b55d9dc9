//! Experiment parameters and boundary validation.
//!
//! The engine itself accepts any `f64` and never validates (see
//! [`compute`](crate::compute)); validation lives here, at the boundary,
//! for callers that want to enforce the documented consumer ranges before
//! handing values to the engine.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::Metrics;

/// Documented consumer range for `num_features`.
pub const NUM_FEATURES_RANGE: RangeInclusive<f64> = 100.0..=50_000.0;
/// Documented consumer range for `num_samples`.
pub const NUM_SAMPLES_RANGE: RangeInclusive<f64> = 10.0..=100_000.0;
/// Documented consumer range for `background_variance`.
pub const BACKGROUND_VARIANCE_RANGE: RangeInclusive<f64> = 0.05..=0.50;
/// Documented consumer range for `expected_effect`.
pub const EXPECTED_EFFECT_RANGE: RangeInclusive<f64> = 0.01..=0.50;

/// The four parameters describing an experiment design.
///
/// Plain data: builders do not validate, so out-of-range designs can still
/// be constructed and fed to the engine (useful for exploring degenerate
/// regimes). Call [`validate`](Self::validate) to enforce the documented
/// ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperimentParams {
    /// Count of measured variables (p).
    pub num_features: f64,
    /// Count of independent observations (N).
    pub num_samples: f64,
    /// Background noise scale (σ), typical magnitude 0.05–0.5.
    pub background_variance: f64,
    /// Expected effect size (δ), typical magnitude 0.01–0.5.
    pub expected_effect: f64,
}

impl Default for ExperimentParams {
    fn default() -> Self {
        Self {
            num_features: 1_000.0,
            num_samples: 1_000.0,
            background_variance: 0.2,
            expected_effect: 0.1,
        }
    }
}

impl ExperimentParams {
    /// Create parameters with default mid-range settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the feature count.
    pub fn num_features(mut self, p: f64) -> Self {
        self.num_features = p;
        self
    }

    /// Set the sample count.
    pub fn num_samples(mut self, n: f64) -> Self {
        self.num_samples = n;
        self
    }

    /// Set the background variance.
    pub fn background_variance(mut self, sigma: f64) -> Self {
        self.background_variance = sigma;
        self
    }

    /// Set the expected effect size.
    pub fn expected_effect(mut self, delta: f64) -> Self {
        self.expected_effect = delta;
        self
    }

    /// Compute detectability metrics for this design.
    ///
    /// Forwards to [`compute`](crate::compute); no validation is applied.
    pub fn metrics(&self) -> Metrics {
        crate::engine::compute(
            self.num_features,
            self.num_samples,
            self.background_variance,
            self.expected_effect,
        )
    }

    /// Check that every parameter is finite and within its documented range.
    ///
    /// Returns the first violation found, checking in field order.
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_range("num_features", self.num_features, NUM_FEATURES_RANGE)?;
        check_range("num_samples", self.num_samples, NUM_SAMPLES_RANGE)?;
        check_range(
            "background_variance",
            self.background_variance,
            BACKGROUND_VARIANCE_RANGE,
        )?;
        check_range("expected_effect", self.expected_effect, EXPECTED_EFFECT_RANGE)?;
        Ok(())
    }
}

fn check_range(
    name: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<(), ParamsError> {
    if !value.is_finite() {
        return Err(ParamsError::NotFinite { name, value });
    }
    if !range.contains(&value) {
        return Err(ParamsError::OutOfRange {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}

/// A parameter rejected by [`ExperimentParams::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// The parameter is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NotFinite {
        /// Field name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The parameter is outside its documented consumer range.
    #[error("{name} must be within {min}..={max}, got {value}")]
    OutOfRange {
        /// Field name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(ExperimentParams::default().validate().is_ok());
    }

    #[test]
    fn builder_methods_set_fields() {
        let params = ExperimentParams::new()
            .num_features(20_000.0)
            .num_samples(200.0)
            .background_variance(0.3)
            .expected_effect(0.05);

        assert_eq!(params.num_features, 20_000.0);
        assert_eq!(params.num_samples, 200.0);
        assert_eq!(params.background_variance, 0.3);
        assert_eq!(params.expected_effect, 0.05);
    }

    #[test]
    fn metrics_matches_free_function() {
        let params = ExperimentParams::new().num_features(20_000.0).num_samples(200.0);
        assert_eq!(params.metrics(), crate::compute(20_000.0, 200.0, 0.2, 0.1));
    }

    #[test]
    fn builders_do_not_validate() {
        // Engine exploration with out-of-range values is allowed.
        let params = ExperimentParams::new().num_samples(0.0);
        let m = params.metrics();
        assert!(m.gamma.is_infinite());
    }
}
