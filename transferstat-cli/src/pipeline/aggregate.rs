//! Group-by Aggregation
//!
//! Groups records by (k, bytes) and summarizes each group's times.

use super::load::Record;
use std::collections::BTreeMap;
use tracing::{debug, warn};
use transferstat_report::{AggregateRow, GroupKey};
use transferstat_stats::compute_group_summary;

/// Raw time samples per (k, bytes), ordered by k then bytes
pub fn group_samples(records: &[Record]) -> BTreeMap<GroupKey, Vec<f64>> {
    let mut groups: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();
    for r in records {
        groups
            .entry(GroupKey {
                k: r.k,
                bytes: r.bytes,
            })
            .or_default()
            .push(r.time);
    }
    groups
}

/// Summarize every (k, bytes) group.
///
/// Groups with a single sample keep a NaN standard deviation and CI.
pub fn aggregate(records: &[Record]) -> Vec<AggregateRow> {
    group_samples(records)
        .into_iter()
        .map(|(key, samples)| {
            let summary = compute_group_summary(&samples);
            if samples.len() < 2 {
                warn!(
                    k = key.k,
                    bytes = key.bytes,
                    "single-sample group, standard deviation is undefined"
                );
            }
            debug!(
                k = key.k,
                bytes = key.bytes,
                n = summary.count,
                mean = summary.mean,
                "aggregated group"
            );
            AggregateRow { key, summary }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::record;

    #[test]
    fn test_aggregate_means() {
        let records = vec![
            record(8, 64, 0.5),
            record(1, 64, 1.0),
            record(1, 64, 1.2),
            record(8, 64, 0.6),
            record(1, 64, 0.8),
            record(8, 64, 0.4),
        ];
        let rows = aggregate(&records);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, GroupKey { k: 1, bytes: 64 });
        assert!((rows[0].summary.mean - 1.0).abs() < 1e-12);
        assert_eq!(rows[0].summary.count, 3);
        assert_eq!(rows[1].key, GroupKey { k: 8, bytes: 64 });
        assert!((rows[1].summary.mean - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_ordered_by_k_then_bytes() {
        let records = vec![
            record(8, 16, 0.1),
            record(1, 1024, 0.2),
            record(1, 16, 0.3),
            record(8, 2, 0.4),
        ];
        let keys: Vec<_> = aggregate(&records)
            .iter()
            .map(|r| (r.key.k, r.key.bytes))
            .collect();

        assert_eq!(keys, vec![(1, 16), (1, 1024), (8, 2), (8, 16)]);
    }

    #[test]
    fn test_single_sample_group_is_nan() {
        let rows = aggregate(&[record(1, 64, 2.0)]);

        assert_eq!(rows[0].summary.count, 1);
        assert!((rows[0].summary.mean - 2.0).abs() < f64::EPSILON);
        assert!(rows[0].summary.std_dev.is_nan());
        assert!(rows[0].summary.ci_half_width.is_nan());
    }

    #[test]
    fn test_group_samples_keeps_input_order() {
        let groups = group_samples(&[record(1, 64, 3.0), record(1, 64, 1.0)]);
        assert_eq!(groups[&GroupKey { k: 1, bytes: 64 }], vec![3.0, 1.0]);
    }
}
