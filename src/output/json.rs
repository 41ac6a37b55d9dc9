//! JSON serialization for detectability metrics.

use crate::report::Metrics;

/// Serialize a Metrics record to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Metrics).
/// Note that non-finite fields serialize as JSON `null`.
pub fn to_json(metrics: &Metrics) -> Result<String, serde_json::Error> {
    serde_json::to_string(metrics)
}

/// Serialize a Metrics record to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for Metrics).
pub fn to_json_pretty(metrics: &Metrics) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(metrics)
}
