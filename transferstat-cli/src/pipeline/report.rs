//! Report Building
//!
//! Runs aggregation, comparison and per-size tests over the loaded records
//! and assembles the [`Report`].

use super::load::Record;
use super::{BASELINE_K, CANDIDATE_K, aggregate, compute_effect, reshape, test_sizes};
use chrono::Utc;
use std::path::Path;
use transferstat_report::{Report, ReportMeta};

/// Build a complete Report from loaded records
///
/// # Arguments
/// * `records` - Every measurement of the input file
/// * `input` - Path the records were loaded from, kept for the metadata
pub fn build_report(records: &[Record], input: &Path) -> Report {
    let aggregates = aggregate(records);
    let comparisons = reshape(&aggregates);
    let effect_size = compute_effect(&comparisons);
    let tests = test_sizes(records);

    Report {
        meta: ReportMeta {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            input: input.display().to_string(),
            record_count: records.len(),
            baseline_k: BASELINE_K,
            candidate_k: CANDIDATE_K,
        },
        aggregates,
        comparisons,
        effect_size,
        tests,
    }
}
