//! # detlim
//!
//! Detectability statistics for causal-inference experiment designs.
//!
//! Given four experimental parameters — feature count, sample count,
//! background variance, and expected effect size — the crate computes the
//! irreducible noise floor, a detection threshold, and the derived
//! error/power metrics for the design, using a closed-form approximation
//! to the normal CDF. The core is a single deterministic pure function;
//! callers re-run it on every parameter change and render the returned
//! record.
//!
//! ## Quick Start
//!
//! ```
//! use detlim::{ExperimentParams, PowerBand};
//!
//! let metrics = ExperimentParams::new()
//!     .num_features(20_000.0)
//!     .num_samples(200.0)
//!     .background_variance(0.2)
//!     .expected_effect(0.1)
//!     .metrics();
//!
//! assert!(metrics.is_high_dimensional);
//! assert!(!metrics.is_detectable);
//! assert_eq!(metrics.power_band(), PowerBand::Undetectable);
//! ```
//!
//! The engine is total over `f64`: it never panics and never validates.
//! Degenerate inputs (zero samples, negative effects) propagate through
//! the arithmetic as IEEE-754 sentinels. Range validation for interactive
//! consumers lives on [`ExperimentParams::validate`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod engine;
mod math;
mod params;
mod report;

pub mod output;

pub use engine::{compute, THRESHOLD_SIGMA};
pub use math::{erf, normal_cdf};
pub use params::{
    ExperimentParams, ParamsError, BACKGROUND_VARIANCE_RANGE, EXPECTED_EFFECT_RANGE,
    NUM_FEATURES_RANGE, NUM_SAMPLES_RANGE,
};
pub use report::{Metrics, PowerBand, Regime};
