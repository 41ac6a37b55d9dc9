//! Terminal output formatting for detectability reports.

use std::fmt::Write;

use colored::Colorize;

use crate::report::{Metrics, PowerBand};

use super::format_value;

/// Separator line used in output.
const SEPARATOR: &str = "──────────────────────────────────────────────";

/// Format a Metrics record for human-readable terminal output.
///
/// Uses ANSI colors: the verdict header is green/yellow, the power line is
/// colored by its interpretation band.
pub fn format_metrics(metrics: &Metrics) -> String {
    let mut out = String::new();

    writeln!(out, "detlim").unwrap();
    writeln!(out, "{SEPARATOR}").unwrap();

    let header = if metrics.is_detectable {
        format!("{} {}", "\u{2713}".green().bold(), "Effect above detection threshold".green().bold())
    } else {
        format!(
            "{} {}",
            "\u{26A0}".yellow().bold(),
            "Effect below detection threshold".yellow().bold()
        )
    };
    writeln!(out, "  {header}").unwrap();
    writeln!(out).unwrap();

    let power_line = format!(
        "Power: {:.1}% ({})",
        metrics.power * 100.0,
        metrics.power_band()
    );
    let power_colored = match metrics.power_band() {
        PowerBand::Adequate => power_line.green(),
        PowerBand::Underpowered => power_line.yellow(),
        PowerBand::Undetectable => power_line.red(),
    };
    writeln!(out, "  {power_colored}").unwrap();

    write_body(&mut out, metrics);
    out
}

/// Format a Metrics record without colors.
pub fn format_metrics_plain(metrics: &Metrics) -> String {
    let mut out = String::new();

    writeln!(out, "detlim").unwrap();
    writeln!(out, "{SEPARATOR}").unwrap();

    let verdict = if metrics.is_detectable {
        "Effect above detection threshold"
    } else {
        "Effect below detection threshold"
    };
    writeln!(out, "  {verdict}").unwrap();
    writeln!(out).unwrap();

    writeln!(
        out,
        "  Power: {:.1}% ({})",
        metrics.power * 100.0,
        metrics.power_band()
    )
    .unwrap();

    write_body(&mut out, metrics);
    out
}

fn write_body(out: &mut String, metrics: &Metrics) {
    writeln!(
        out,
        "  Regime: {} (gamma = {})",
        metrics.regime(),
        format_value(metrics.gamma)
    )
    .unwrap();
    writeln!(out).unwrap();

    writeln!(out, "  Noise floor:         {}", format_value(metrics.sigma_min)).unwrap();
    writeln!(out, "  Threshold:           {}", format_value(metrics.threshold)).unwrap();
    writeln!(out, "  Z-score:             {}", format_value(metrics.z_score)).unwrap();
    writeln!(
        out,
        "  False positive rate: {}",
        format_value(metrics.false_positive_rate)
    )
    .unwrap();
    writeln!(
        out,
        "  False negative rate: {}",
        format_value(metrics.false_negative_rate)
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_covers_every_metric() {
        let m = crate::compute(20_000.0, 200.0, 0.2, 0.1);
        let text = format_metrics_plain(&m);

        assert!(text.contains("Effect below detection threshold"));
        assert!(text.contains("Power: 3.3% (undetectable)"));
        assert!(text.contains("extreme"));
        assert!(text.contains("Noise floor:"));
        assert!(text.contains("Threshold:"));
        assert!(text.contains("Z-score:"));
        assert!(text.contains("False positive rate:"));
        assert!(text.contains("False negative rate:"));
    }

    #[test]
    fn detectable_design_gets_positive_verdict() {
        let m = crate::compute(100.0, 100_000.0, 0.2, 0.1);
        assert!(m.is_detectable);
        let text = format_metrics_plain(&m);
        assert!(text.contains("Effect above detection threshold"));
    }

    #[test]
    fn degenerate_metrics_do_not_panic() {
        let m = crate::compute(100.0, 0.0, 0.2, 0.1);
        let text = format_metrics_plain(&m);
        assert!(text.contains("NaN") || text.contains("inf"));

        // Colored variant takes the same path.
        let _ = format_metrics(&m);
    }
}
