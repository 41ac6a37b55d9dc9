//! Output formatting for detectability reports.

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_metrics, format_metrics_plain};

/// Format a metric value for display.
///
/// Nonzero magnitudes below `1e-4` or above `1e4` use scientific notation;
/// everything else uses fixed three decimals. `NaN` and `±inf` render
/// literally so degenerate designs stay visible.
pub fn format_value(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let mag = v.abs();
    if mag != 0.0 && (mag < 1e-4 || mag > 1e4) {
        format!("{v:.3e}")
    } else {
        format!("{v:.3}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_decimals_in_normal_range() {
        assert_eq!(format_value(0.1234), "0.123");
        assert_eq!(format_value(2.0), "2.000");
        assert_eq!(format_value(0.0), "0.000");
        assert_eq!(format_value(-0.5), "-0.500");
    }

    #[test]
    fn scientific_for_extreme_magnitudes() {
        assert_eq!(format_value(0.00001), "1.000e-5");
        assert_eq!(format_value(123_456.0), "1.235e5");
        assert_eq!(format_value(-0.00002), "-2.000e-5");
    }

    #[test]
    fn boundary_magnitudes_stay_fixed() {
        // Exactly 1e-4 and 1e4 are inside the fixed-notation band.
        assert_eq!(format_value(1e-4), "0.000");
        assert_eq!(format_value(1e4), "10000.000");
    }

    #[test]
    fn non_finite_render_literally() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "inf");
        assert_eq!(format_value(f64::NEG_INFINITY), "-inf");
    }
}
