//! Report Pipeline
//!
//! Turns a measurements file into a report or a chart.
//!
//! ## Pipeline Overview
//!
//! ```text
//! results.csv
//!       │
//!       ▼
//! ┌─────────────┐
//! │    load     │  Parse rows into Records
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  aggregate  │  Per-(k, bytes) mean, std dev, count, 95% CI
//! └──────┬──────┘
//!        │
//!        ├───────────────────────► chart (SVG bar chart)
//!        ▼
//! ┌─────────────┐
//! │   compare   │  k1 vs k8 per size, improvement, Cohen's d
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │significance │  Per-size t-tests on raw samples
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Assemble Report
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`load`] - CSV parsing into [`Record`]s
//! - [`aggregate`] - Group-by summaries
//! - [`compare`] - Reshape into the k1/k8 table and derive effect size
//! - [`significance`] - Per-size two-sample t-tests
//! - [`report`] - Report assembly
//! - [`formatting`] - Human-readable output formatting
//! - [`chart`] - Bar chart data for the SVG renderer

mod aggregate;
mod chart;
mod compare;
mod formatting;
mod load;
mod report;
mod significance;

// Re-export public API
pub use aggregate::{aggregate, group_samples};
pub use chart::build_chart_data;
pub use compare::{compute_effect, mean_differences, reshape};
pub use formatting::format_human_output;
pub use load::{DataError, Record, load_records, read_records};
pub use report::build_report;
pub use significance::{distinct_sizes, test_sizes};

/// Reference concurrency level
pub const BASELINE_K: i64 = 1;

/// Concurrency level compared against the baseline
pub const CANDIDATE_K: i64 = 8;

/// Relative improvement of `candidate` over `baseline`, in percent.
///
/// No guard for a zero baseline: the result follows IEEE division.
pub(crate) fn improvement_pct(baseline: f64, candidate: f64) -> f64 {
    (baseline - candidate) / baseline * 100.0
}

#[cfg(test)]
pub(crate) fn record(k: i64, bytes: u64, time: f64) -> Record {
    Record { k, bytes, time }
}
