//! Detectability report types: the metrics record and its qualitative
//! interpretation bands.

use serde::{Deserialize, Serialize};

/// Detectability metrics for one experiment design.
///
/// All fields are derived from the four inputs of
/// [`compute`](crate::compute); the record has no identity and no lifecycle
/// beyond the call that produced it. It is recomputed from scratch on every
/// parameter change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Dimensionality ratio γ = p / N.
    pub gamma: f64,
    /// Irreducible noise floor σ_min = σ · γ^¼.
    pub sigma_min: f64,
    /// Detection threshold, 2 · σ_min.
    pub threshold: f64,
    /// Standardized effect size, δ / σ_min.
    pub z_score: f64,
    /// Probability of declaring an effect when none exists, 1 − Φ(threshold/σ_min).
    pub false_positive_rate: f64,
    /// Probability of missing a true effect of size δ, Φ((threshold − δ)/σ_min).
    pub false_negative_rate: f64,
    /// Probability of correctly detecting a true effect, 1 − false_negative_rate.
    pub power: f64,
    /// Whether γ > 1 (feature count strictly exceeds observations).
    pub is_high_dimensional: bool,
    /// Whether δ strictly exceeds the detection threshold.
    pub is_detectable: bool,
}

impl Metrics {
    /// Qualitative power band for this design.
    pub fn power_band(&self) -> PowerBand {
        PowerBand::from_power(self.power)
    }

    /// Dimensionality regime for this design.
    pub fn regime(&self) -> Regime {
        Regime::from_gamma(self.gamma)
    }

    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        let verdict = if self.is_detectable {
            "effect above threshold"
        } else {
            "effect below threshold"
        };
        format!(
            "{} | power {:.1}% ({}) | gamma {:.3} ({})",
            verdict,
            self.power * 100.0,
            self.power_band(),
            self.gamma,
            self.regime(),
        )
    }
}

/// Qualitative interpretation band keyed on statistical power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerBand {
    /// power < 0.2: the design cannot see the effect.
    Undetectable,
    /// 0.2 ≤ power < 0.8: detection is possible but unreliable.
    Underpowered,
    /// power ≥ 0.8: standard adequacy criterion met.
    Adequate,
}

impl PowerBand {
    /// Classify a power value. `NaN` classifies as [`PowerBand::Undetectable`]
    /// (it fails every threshold comparison).
    pub fn from_power(power: f64) -> Self {
        if power >= 0.8 {
            PowerBand::Adequate
        } else if power >= 0.2 {
            PowerBand::Underpowered
        } else {
            PowerBand::Undetectable
        }
    }
}

impl std::fmt::Display for PowerBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerBand::Undetectable => write!(f, "undetectable"),
            PowerBand::Underpowered => write!(f, "underpowered"),
            PowerBand::Adequate => write!(f, "adequate"),
        }
    }
}

/// Dimensionality regime keyed on γ = p / N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    /// γ ≤ 0.1: observations comfortably exceed features.
    Comfortable,
    /// 0.1 < γ ≤ 1: feature count approaching sample count.
    Moderate,
    /// 1 < γ ≤ 10: more features than observations.
    HighDimensional,
    /// γ > 10: features overwhelm observations.
    Extreme,
}

impl Regime {
    /// Classify a dimensionality ratio. `NaN` classifies as
    /// [`Regime::Comfortable`] (it fails every threshold comparison).
    pub fn from_gamma(gamma: f64) -> Self {
        if gamma > 10.0 {
            Regime::Extreme
        } else if gamma > 1.0 {
            Regime::HighDimensional
        } else if gamma > 0.1 {
            Regime::Moderate
        } else {
            Regime::Comfortable
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Regime::Comfortable => write!(f, "comfortable (p << N)"),
            Regime::Moderate => write!(f, "moderate (p ~ N)"),
            Regime::HighDimensional => write!(f, "high-dimensional (p > N)"),
            Regime::Extreme => write!(f, "extreme (p >> N)"),
        }
    }
}
