//! k1 vs k8 Comparison
//!
//! Reshapes the aggregate table into one row per message size with the
//! baseline and candidate means side by side, then derives the improvement
//! and the overall effect size.

use super::{BASELINE_K, CANDIDATE_K, improvement_pct};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;
use transferstat_report::{AggregateRow, ComparisonRow};
use transferstat_stats::{EffectSize, compute_effect_size};

/// One row per distinct message size (ascending) holding the k=1 and k=8 means.
///
/// Groups at other k levels are ignored. A size missing one of the two
/// levels gets NaN on that side, and so do its derived columns.
pub fn reshape(aggregates: &[AggregateRow]) -> Vec<ComparisonRow> {
    let mut sizes: BTreeMap<u64, (f64, f64)> = BTreeMap::new();
    let mut ignored: BTreeSet<i64> = BTreeSet::new();

    for row in aggregates {
        let entry = match row.key.k {
            BASELINE_K | CANDIDATE_K => sizes
                .entry(row.key.bytes)
                .or_insert((f64::NAN, f64::NAN)),
            other => {
                ignored.insert(other);
                continue;
            }
        };
        if row.key.k == BASELINE_K {
            entry.0 = row.summary.mean;
        } else {
            entry.1 = row.summary.mean;
        }
    }

    if !ignored.is_empty() {
        warn!(levels = ?ignored, "ignoring k levels outside the comparison");
    }

    sizes
        .into_iter()
        .map(|(bytes, (k1_mean, k8_mean))| {
            let row = ComparisonRow {
                bytes,
                k1_mean,
                k8_mean,
                improvement_pct: improvement_pct(k1_mean, k8_mean),
                time_saved: k1_mean - k8_mean,
            };
            if !row.is_complete() {
                warn!(
                    bytes,
                    k1_missing = k1_mean.is_nan(),
                    k8_missing = k8_mean.is_nan(),
                    "message size lacks one of the compared k levels"
                );
            }
            row
        })
        .collect()
}

/// k1 - k8 over the sizes measured at both levels
pub fn mean_differences(rows: &[ComparisonRow]) -> Vec<f64> {
    rows.iter()
        .filter(|r| r.is_complete())
        .map(|r| r.k1_mean - r.k8_mean)
        .collect()
}

/// Cohen's d over the per-size mean differences
pub fn compute_effect(rows: &[ComparisonRow]) -> EffectSize {
    let effect = compute_effect_size(&mean_differences(rows));
    if effect.cohens_d.is_nan() {
        warn!(
            differences = effect.differences,
            "Cohen's d is undefined for these differences"
        );
    }
    effect
}
