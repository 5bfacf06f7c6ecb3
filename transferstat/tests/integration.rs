//! Integration tests for transferstat
//!
//! These tests verify the end-to-end behavior from a CSV file on disk to
//! the rendered report and chart.

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use transferstat::{
    ChartStyle, DataError, EffectInterpretation, aggregate, build_chart_data, build_report,
    format_human_output, generate_csv_report, generate_json_report, load_records,
    render_bar_chart, students_t_test,
};

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Three sizes, three samples per level, rows interleaved as a benchmark
/// harness would write them
const RESULTS: &str = "\
bytes,k,time
1024,1,2.0
1024,8,1.0
64,1,1.0
64,8,0.5
4096,1,0.5
4096,8,0.3
1024,1,2.2
1024,8,1.1
64,1,1.2
64,8,0.6
4096,1,0.6
4096,8,0.35
1024,1,1.8
1024,8,0.9
64,1,0.8
64,8,0.4
4096,1,0.4
4096,8,0.25
";

/// Test the single-size scenario end to end
#[test]
fn test_single_size_scenario() {
    let file = write_csv("bytes,k,time\n64,1,1.0\n64,1,1.2\n64,1,0.8\n64,8,0.5\n64,8,0.6\n64,8,0.4\n");
    let records = load_records(file.path()).unwrap();
    let report = build_report(&records, file.path());

    let row = &report.comparisons[0];
    assert_eq!(row.bytes, 64);
    assert!((row.k1_mean - 1.0).abs() < 1e-12);
    assert!((row.k8_mean - 0.5).abs() < 1e-12);
    assert!((row.improvement_pct - 50.0).abs() < 1e-9);
    assert!((row.time_saved - 0.5).abs() < 1e-12);

    let test = &report.tests[0];
    assert!((test.test.t_statistic - 3.872_983).abs() < 1e-5);
    assert!((test.test.p_value - 0.017_948).abs() < 1e-5);
}

/// Printed means equal the arithmetic mean of the raw times per (k, bytes)
#[test]
fn test_means_match_raw_samples() {
    let file = write_csv(RESULTS);
    let records = load_records(file.path()).unwrap();
    let report = build_report(&records, file.path());

    for row in &report.comparisons {
        let raw = |k: i64| -> f64 {
            let times: Vec<f64> = records
                .iter()
                .filter(|r| r.k == k && r.bytes == row.bytes)
                .map(|r| r.time)
                .collect();
            times.iter().sum::<f64>() / times.len() as f64
        };
        assert!((row.k1_mean - raw(1)).abs() < 1e-12);
        assert!((row.k8_mean - raw(8)).abs() < 1e-12);
    }
}

/// Improvement in the comparison table equals the one recomputed per test
#[test]
fn test_improvement_consistent() {
    let file = write_csv(RESULTS);
    let records = load_records(file.path()).unwrap();
    let report = build_report(&records, file.path());

    assert_eq!(report.comparisons.len(), 3);
    for row in &report.comparisons {
        let test = report.tests.iter().find(|t| t.bytes == row.bytes).unwrap();
        assert!((row.improvement_pct - test.improvement_pct).abs() < 1e-9);
    }
}

/// Cohen's d over the per-size differences, sample standard deviation
#[test]
fn test_cohens_d() {
    let file = write_csv(RESULTS);
    let records = load_records(file.path()).unwrap();
    let report = build_report(&records, file.path());

    // Differences: 64 -> 0.5, 1024 -> 1.0, 4096 -> 0.2
    let diffs: Vec<f64> = report
        .comparisons
        .iter()
        .map(|r| r.k1_mean - r.k8_mean)
        .collect();
    let mean = diffs.iter().sum::<f64>() / 3.0;
    let var = diffs.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / 2.0;

    assert_eq!(report.effect_size.differences, 3);
    assert!((report.effect_size.cohens_d - mean / var.sqrt()).abs() < 1e-9);
    assert_eq!(
        report.effect_size.interpretation,
        EffectInterpretation::Large
    );
}

/// Per-size tests follow the order sizes first appear in the file
#[test]
fn test_per_size_order_and_values() {
    let file = write_csv(RESULTS);
    let records = load_records(file.path()).unwrap();
    let report = build_report(&records, file.path());

    let order: Vec<u64> = report.tests.iter().map(|t| t.bytes).collect();
    assert_eq!(order, vec![1024, 64, 4096]);

    let expected = students_t_test(&[2.0, 2.2, 1.8], &[1.0, 1.1, 0.9]);
    assert!((report.tests[0].test.t_statistic - expected.t_statistic).abs() < 1e-9);
    assert!((report.tests[0].test.p_value - expected.p_value).abs() < 1e-12);
    assert_eq!(report.tests[0].k1.count, 3);
}

/// A size measured only at k=1 surfaces NaN instead of failing
#[test]
fn test_missing_level_and_single_sample() {
    let file = write_csv("bytes,k,time\n64,1,1.0\n64,1,1.2\n64,8,0.5\n64,8,0.6\n128,1,2.0\n");
    let records = load_records(file.path()).unwrap();
    let report = build_report(&records, file.path());

    let row = report.comparisons.iter().find(|r| r.bytes == 128).unwrap();
    assert!(row.k8_mean.is_nan());
    assert!(row.improvement_pct.is_nan());

    // Cohen's d only sees the complete size
    assert_eq!(report.effect_size.differences, 1);
    assert!(report.effect_size.cohens_d.is_nan());

    let agg = report
        .aggregates
        .iter()
        .find(|a| a.key.k == 1 && a.key.bytes == 128)
        .unwrap();
    assert!(agg.summary.ci_half_width.is_nan());

    let output = format_human_output(&report);
    assert!(output.contains("  128 bytes:"));
    assert!(output.contains("t-test: t=NaN, p=NaN"));
}

/// Missing files and columns are reported as errors
#[test]
fn test_load_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_records(dir.path().join("results.csv")),
        Err(DataError::Open { .. })
    ));

    let file = write_csv("bytes,time\n64,1.0\n");
    assert!(matches!(
        load_records(file.path()),
        Err(DataError::Parse { .. })
    ));
}

/// JSON and CSV outputs carry the same per-size numbers
#[test]
fn test_machine_readable_outputs() {
    let file = write_csv(RESULTS);
    let records = load_records(file.path()).unwrap();
    let report = build_report(&records, Path::new("logs/results.csv"));

    let json: serde_json::Value =
        serde_json::from_str(&generate_json_report(&report).unwrap()).unwrap();
    assert_eq!(json["meta"]["input"], "logs/results.csv");
    assert_eq!(json["comparisons"].as_array().unwrap().len(), 3);
    assert_eq!(json["tests"][0]["bytes"], 1024);

    let csv = generate_csv_report(&report).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.lines().nth(1).unwrap().starts_with("64,"));
}

/// Chart renders one bar per (size, level) with error bars
#[test]
fn test_chart_end_to_end() {
    let file = write_csv(RESULTS);
    let records = load_records(file.path()).unwrap();
    let data = build_chart_data(&aggregate(&records));
    let svg = render_bar_chart(&data, &ChartStyle::default());

    assert_eq!(data.categories, vec!["64", "1024", "4096"]);
    assert_eq!(svg.matches("class=\"bar\"").count(), 6);
    assert_eq!(svg.matches("class=\"error-bar\"").count(), 6);
    assert!(svg.contains("Mean Transfer Time ± 95% CI"));
}
