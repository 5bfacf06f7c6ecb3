//! Per-size Significance Tests
//!
//! For every message size, compares the raw k=1 and k=8 time samples with
//! Student's two-sample t-test. Means, counts and improvement are
//! recomputed from the raw samples rather than read from the aggregates.

use super::aggregate::group_samples;
use super::load::Record;
use super::{BASELINE_K, CANDIDATE_K, improvement_pct};
use std::collections::BTreeSet;
use tracing::{debug, warn};
use transferstat_report::{GroupKey, SampleInfo, SizeTestResult};
use transferstat_stats::{mean, students_t_test};

/// Distinct message sizes in order of first appearance
pub fn distinct_sizes(records: &[Record]) -> Vec<u64> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .map(|r| r.bytes)
        .filter(|bytes| seen.insert(*bytes))
        .collect()
}

/// Run one t-test per distinct message size
pub fn test_sizes(records: &[Record]) -> Vec<SizeTestResult> {
    let mut groups = group_samples(records);
    distinct_sizes(records)
        .into_iter()
        .map(|bytes| {
            let mut take = |k: i64| groups.remove(&GroupKey { k, bytes }).unwrap_or_default();
            let k1 = take(BASELINE_K);
            let k8 = take(CANDIDATE_K);
            let k1_mean = mean(&k1);
            let k8_mean = mean(&k8);

            let test = students_t_test(&k1, &k8);
            if test.p_value.is_nan() {
                warn!(
                    bytes,
                    k1_n = k1.len(),
                    k8_n = k8.len(),
                    "t-test undefined for this message size"
                );
            } else {
                debug!(bytes, t = test.t_statistic, p = test.p_value, "t-test");
            }

            SizeTestResult {
                bytes,
                k1: SampleInfo {
                    mean: k1_mean,
                    count: k1.len(),
                },
                k8: SampleInfo {
                    mean: k8_mean,
                    count: k8.len(),
                },
                improvement_pct: improvement_pct(k1_mean, k8_mean),
                test,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::record;

    fn scenario() -> Vec<Record> {
        vec![
            record(1, 64, 1.0),
            record(8, 64, 0.5),
            record(1, 64, 1.2),
            record(8, 64, 0.6),
            record(1, 64, 0.8),
            record(8, 64, 0.4),
        ]
    }

    #[test]
    fn test_scenario() {
        let results = test_sizes(&scenario());

        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.bytes, 64);
        assert!((r.k1.mean - 1.0).abs() < 1e-12);
        assert_eq!(r.k1.count, 3);
        assert!((r.k8.mean - 0.5).abs() < 1e-12);
        assert_eq!(r.k8.count, 3);
        assert!((r.improvement_pct - 50.0).abs() < 1e-9);
        assert!((r.test.t_statistic - 3.872_983).abs() < 1e-5);
        assert!((r.test.p_value - 0.017_948).abs() < 1e-5);
    }

    #[test]
    fn test_first_appearance_order() {
        let records = vec![
            record(1, 4096, 2.0),
            record(1, 64, 1.0),
            record(8, 4096, 1.0),
            record(8, 1024, 1.0),
        ];
        assert_eq!(distinct_sizes(&records), vec![4096, 64, 1024]);
    }

    #[test]
    fn test_missing_level_surfaces_nan() {
        let records = vec![record(1, 128, 2.0), record(1, 128, 2.2)];
        let results = test_sizes(&records);

        assert_eq!(results[0].k8.count, 0);
        assert!(results[0].k8.mean.is_nan());
        assert!(results[0].improvement_pct.is_nan());
        assert!(results[0].test.t_statistic.is_nan());
        assert!(results[0].test.p_value.is_nan());
    }

    #[test]
    fn test_other_levels_excluded_from_samples() {
        let mut records = scenario();
        records.push(record(4, 64, 100.0));
        let results = test_sizes(&records);

        assert_eq!(results[0].k1.count, 3);
        assert_eq!(results[0].k8.count, 3);
    }

    #[test]
    fn test_interleaved_sizes_keep_their_own_samples() {
        let records = vec![
            record(8, 1024, 0.3),
            record(1, 64, 1.0),
            record(1, 1024, 0.9),
            record(8, 64, 0.5),
            record(1, 64, 1.2),
            record(8, 1024, 0.5),
            record(4, 1024, 9.0),
            record(1, 1024, 1.1),
            record(8, 64, 0.7),
        ];
        let results = test_sizes(&records);

        let sizes: Vec<u64> = results.iter().map(|r| r.bytes).collect();
        assert_eq!(sizes, vec![1024, 64]);

        let big = &results[0];
        assert_eq!((big.k1.count, big.k8.count), (2, 2));
        assert!((big.k1.mean - 1.0).abs() < 1e-12);
        assert!((big.k8.mean - 0.4).abs() < 1e-12);
        assert!((big.improvement_pct - 60.0).abs() < 1e-9);

        let small = &results[1];
        assert_eq!((small.k1.count, small.k8.count), (2, 2));
        assert!((small.k1.mean - 1.1).abs() < 1e-12);
        assert!((small.k8.mean - 0.6).abs() < 1e-12);
        assert_eq!(small.test.degrees_of_freedom, 2.0);
    }
}
