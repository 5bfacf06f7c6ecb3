//! Report Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use transferstat_stats::{EffectSize, GroupSummary, TTestResult};

/// Complete transfer benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Tool version, run time and input description
    pub meta: ReportMeta,
    /// One row per (k, bytes) group, ordered by k then bytes
    pub aggregates: Vec<AggregateRow>,
    /// One row per distinct message size, ascending
    pub comparisons: Vec<ComparisonRow>,
    /// Cohen's d over the per-size mean differences
    pub effect_size: EffectSize,
    /// Per-size t-tests, in order of first appearance in the input
    pub tests: Vec<SizeTestResult>,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// transferstat version that produced the report
    pub version: String,
    /// Generation time (UTC)
    pub timestamp: DateTime<Utc>,
    /// Path of the measurements file
    pub input: String,
    /// Number of records loaded
    pub record_count: usize,
    /// Reference concurrency level (k=1)
    pub baseline_k: i64,
    /// Compared concurrency level (k=8)
    pub candidate_k: i64,
}

/// Grouping key for aggregation: concurrency level and message size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    /// Concurrency level
    pub k: i64,
    /// Message size in bytes
    pub bytes: u64,
}

/// Aggregated statistics for one (k, bytes) group
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AggregateRow {
    /// Group identity
    #[serde(flatten)]
    pub key: GroupKey,
    /// Statistics of the group's times
    #[serde(flatten)]
    pub summary: GroupSummary,
}

/// Mean times of both levels for one message size
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Message size in bytes
    pub bytes: u64,
    /// Mean time at k=1, NaN if the level is missing for this size
    #[serde(deserialize_with = "transferstat_stats::nan_from_null")]
    pub k1_mean: f64,
    /// Mean time at k=8, NaN if the level is missing for this size
    #[serde(deserialize_with = "transferstat_stats::nan_from_null")]
    pub k8_mean: f64,
    /// (k1 - k8) / k1 * 100
    #[serde(deserialize_with = "transferstat_stats::nan_from_null")]
    pub improvement_pct: f64,
    /// k1 - k8, in seconds
    #[serde(deserialize_with = "transferstat_stats::nan_from_null")]
    pub time_saved: f64,
}

impl ComparisonRow {
    /// Both levels were measured for this size
    pub fn is_complete(&self) -> bool {
        !self.k1_mean.is_nan() && !self.k8_mean.is_nan()
    }
}

/// Mean and sample count of one side of a t-test
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SampleInfo {
    /// Mean time in seconds, NaN for an empty side
    #[serde(deserialize_with = "transferstat_stats::nan_from_null")]
    pub mean: f64,
    /// Number of samples
    pub count: usize,
}

/// Two-sample test between k=1 and k=8 raw samples for one message size
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SizeTestResult {
    /// Message size in bytes
    pub bytes: u64,
    /// Raw k=1 samples at this size
    pub k1: SampleInfo,
    /// Raw k=8 samples at this size
    pub k8: SampleInfo,
    /// Recomputed from the raw samples, not taken from the comparison table
    #[serde(deserialize_with = "transferstat_stats::nan_from_null")]
    pub improvement_pct: f64,
    /// Student's t-test of k1 against k8
    #[serde(flatten)]
    pub test: TTestResult,
}

#[cfg(test)]
pub(crate) fn sample_report() -> Report {
    use transferstat_stats::{compute_effect_size, compute_group_summary, students_t_test};

    let k1 = [1.0, 1.2, 0.8];
    let k8 = [0.5, 0.6, 0.4];
    Report {
        meta: ReportMeta {
            version: "0.1.0".to_string(),
            timestamp: Utc::now(),
            input: "./logs/results.csv".to_string(),
            record_count: 7,
            baseline_k: 1,
            candidate_k: 8,
        },
        aggregates: vec![
            AggregateRow {
                key: GroupKey { k: 1, bytes: 64 },
                summary: compute_group_summary(&k1),
            },
            AggregateRow {
                key: GroupKey { k: 1, bytes: 128 },
                summary: compute_group_summary(&[2.0]),
            },
            AggregateRow {
                key: GroupKey { k: 8, bytes: 64 },
                summary: compute_group_summary(&k8),
            },
        ],
        comparisons: vec![
            ComparisonRow {
                bytes: 64,
                k1_mean: 1.0,
                k8_mean: 0.5,
                improvement_pct: 50.0,
                time_saved: 0.5,
            },
            ComparisonRow {
                bytes: 128,
                k1_mean: 2.0,
                k8_mean: f64::NAN,
                improvement_pct: f64::NAN,
                time_saved: f64::NAN,
            },
        ],
        effect_size: compute_effect_size(&[0.5]),
        tests: vec![
            SizeTestResult {
                bytes: 64,
                k1: SampleInfo { mean: 1.0, count: 3 },
                k8: SampleInfo { mean: 0.5, count: 3 },
                improvement_pct: 50.0,
                test: students_t_test(&k1, &k8),
            },
            SizeTestResult {
                bytes: 128,
                k1: SampleInfo { mean: 2.0, count: 1 },
                k8: SampleInfo {
                    mean: f64::NAN,
                    count: 0,
                },
                improvement_pct: f64::NAN,
                test: students_t_test(&[2.0], &[]),
            },
        ],
    }
}
