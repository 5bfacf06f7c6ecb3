//! Bar chart data: mean transfer time with 95% CI per message size.

use super::{BASELINE_K, CANDIDATE_K};
use std::collections::{BTreeMap, BTreeSet};
use transferstat_report::{AggregateRow, BarSeries, ChartData, GroupKey};
use transferstat_stats::GroupSummary;

/// Build chart data from the aggregate table.
///
/// One category per distinct message size (ascending), one series per
/// compared k level. Missing groups become NaN bars, which the renderer skips.
pub fn build_chart_data(aggregates: &[AggregateRow]) -> ChartData {
    let sizes: BTreeSet<u64> = aggregates.iter().map(|r| r.key.bytes).collect();
    let lookup: BTreeMap<GroupKey, GroupSummary> =
        aggregates.iter().map(|r| (r.key, r.summary)).collect();

    let series = [BASELINE_K, CANDIDATE_K]
        .into_iter()
        .map(|k| {
            let summaries: Vec<Option<&GroupSummary>> = sizes
                .iter()
                .map(|&bytes| lookup.get(&GroupKey { k, bytes }))
                .collect();
            BarSeries {
                label: format!("k={}", k),
                values: summaries
                    .iter()
                    .map(|s| s.map_or(f64::NAN, |s| s.mean))
                    .collect(),
                errors: summaries
                    .iter()
                    .map(|s| s.map_or(f64::NAN, |s| s.ci_half_width))
                    .collect(),
            }
        })
        .collect();

    ChartData {
        title: "Mean Transfer Time ± 95% CI".to_string(),
        x_label: "Message Size (bytes)".to_string(),
        y_label: "Mean Transfer Time (s)".to_string(),
        categories: sizes.iter().map(|b| b.to_string()).collect(),
        series,
    }
}
