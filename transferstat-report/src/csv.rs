//! CSV Output
//!
//! One row per message size joining the comparison table with the
//! per-size t-test.

use crate::report::{Report, SizeTestResult};
use serde::Serialize;

#[derive(Serialize)]
struct CsvRow {
    bytes: u64,
    k1_mean: f64,
    k8_mean: f64,
    improvement_pct: f64,
    time_saved_s: f64,
    k1_n: usize,
    k8_n: usize,
    t_statistic: f64,
    p_value: f64,
}

/// Generate a CSV report (comma-separated, with header row)
pub fn generate_csv_report(report: &Report) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for row in &report.comparisons {
        let test: Option<&SizeTestResult> = report.tests.iter().find(|t| t.bytes == row.bytes);
        writer.serialize(CsvRow {
            bytes: row.bytes,
            k1_mean: row.k1_mean,
            k8_mean: row.k8_mean,
            improvement_pct: row.improvement_pct,
            time_saved_s: row.time_saved,
            k1_n: test.map_or(0, |t| t.k1.count),
            k8_n: test.map_or(0, |t| t.k8.count),
            t_statistic: test.map_or(f64::NAN, |t| t.test.t_statistic),
            p_value: test.map_or(f64::NAN, |t| t.test.p_value),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
