//! Output Formatting
//!
//! Human-readable terminal output: the mean table, the improvement table,
//! Cohen's d, and one block per message size with its t-test.

use transferstat_report::Report;

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();
    let separator = "=".repeat(60);

    let bytes_width = report
        .comparisons
        .iter()
        .map(|r| r.bytes.to_string().len())
        .max()
        .unwrap_or(5)
        .max(5);

    // Mean table
    output.push_str("Mean Transfer Times:\n");
    output.push_str(&format!(
        "  {:>w$}  {:>12}  {:>12}\n",
        "bytes",
        format!("k{}", report.meta.baseline_k),
        format!("k{}", report.meta.candidate_k),
        w = bytes_width
    ));
    for row in &report.comparisons {
        output.push_str(&format!(
            "  {:>w$}  {:>12.6}  {:>12.6}\n",
            row.bytes,
            row.k1_mean,
            row.k8_mean,
            w = bytes_width
        ));
    }
    output.push('\n');
    output.push_str(&separator);
    output.push('\n');

    // Improvement table
    output.push_str("\nPerformance Improvements:\n");
    output.push_str(&format!(
        "  {:>w$}  {:>14}  {:>14}\n",
        "bytes",
        "improvement_%",
        "time_saved_s",
        w = bytes_width
    ));
    for row in &report.comparisons {
        output.push_str(&format!(
            "  {:>w$}  {:>14.6}  {:>14.6}\n",
            row.bytes,
            row.improvement_pct,
            row.time_saved,
            w = bytes_width
        ));
    }
    output.push('\n');
    output.push_str(&separator);
    output.push('\n');

    output.push_str(&format!(
        "  Cohen's d: {:.4} ({})\n",
        report.effect_size.cohens_d, report.effect_size.interpretation
    ));

    // Per-size tests
    output.push_str("\nPer-Message-Size Statistical Tests:\n");
    for t in &report.tests {
        output.push_str(&format!("\n  {} bytes:\n", t.bytes));
        output.push_str(&format!(
            "    k={} mean: {:.3}s (n={})\n",
            report.meta.baseline_k, t.k1.mean, t.k1.count
        ));
        output.push_str(&format!(
            "    k={} mean: {:.3}s (n={})\n",
            report.meta.candidate_k, t.k8.mean, t.k8.count
        ));
        output.push_str(&format!("    Improvement: {:.2}%\n", t.improvement_pct));
        output.push_str(&format!(
            "    t-test: t={:.3}, p={:.6}\n",
            t.test.t_statistic, t.test.p_value
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{build_report, record};
    use std::path::Path;

    fn scenario_report() -> Report {
        let records = vec![
            record(1, 64, 1.0),
            record(1, 64, 1.2),
            record(1, 64, 0.8),
            record(8, 64, 0.5),
            record(8, 64, 0.6),
            record(8, 64, 0.4),
        ];
        build_report(&records, Path::new("results.csv"))
    }

    #[test]
    fn test_sections_in_order() {
        let output = format_human_output(&scenario_report());

        let means = output.find("Mean Transfer Times:").unwrap();
        let improvements = output.find("Performance Improvements:").unwrap();
        let cohen = output.find("Cohen's d:").unwrap();
        let tests = output.find("Per-Message-Size Statistical Tests:").unwrap();
        assert!(means < improvements && improvements < cohen && cohen < tests);
    }

    #[test]
    fn test_per_size_block() {
        let output = format_human_output(&scenario_report());

        assert!(output.contains("  64 bytes:\n"));
        assert!(output.contains("    k=1 mean: 1.000s (n=3)\n"));
        assert!(output.contains("    k=8 mean: 0.500s (n=3)\n"));
        assert!(output.contains("    Improvement: 50.00%\n"));
        assert!(output.contains("    t-test: t=3.873, p=0.017948\n"));
    }

    #[test]
    fn test_tables() {
        let output = format_human_output(&scenario_report());

        assert!(output.contains("1.000000"));
        assert!(output.contains("50.000000"));
        // One size: Cohen's d is undefined
        assert!(output.contains("Cohen's d: NaN (undefined)"));
    }

    #[test]
    fn test_missing_level_prints_nan() {
        let report = build_report(&[record(1, 128, 2.0)], Path::new("results.csv"));
        let output = format_human_output(&report);

        assert!(output.contains("    k=8 mean: NaNs (n=0)\n"));
        assert!(output.contains("t-test: t=NaN, p=NaN"));
    }
}
