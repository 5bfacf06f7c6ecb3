#![warn(missing_docs)]
//! # transferstat
//!
//! Statistics for transfer benchmarks run at two concurrency levels (k=1 and k=8).
//!
//! Reads a CSV of measurements (`bytes`, `k`, `time`) and produces:
//! - **Mean table**: mean transfer time per message size for each level
//! - **Improvements**: percentage improvement and seconds saved per size
//! - **Effect size**: Cohen's d over the per-size mean differences
//! - **Significance**: Student's two-sample t-test per message size
//! - **Chart**: SVG bar chart of the means with 95% confidence error bars
//!
//! ## Quick Start
//!
//! ```ignore
//! let records = transferstat::load_records("logs/results.csv")?;
//! let report = transferstat::build_report(&records, "logs/results.csv".as_ref());
//! print!("{}", transferstat::format_human_output(&report));
//! ```
//!
//! From the command line:
//!
//! ```text
//! transferstat                      # human-readable report of ./logs/results.csv
//! transferstat report --format json # full report as JSON
//! transferstat chart -o time.svg    # bar chart
//! ```

// Re-export the pipeline
pub use transferstat_cli::{
    BASELINE_K, CANDIDATE_K, DataError, Record, TransferConfig, aggregate, build_chart_data,
    build_report, compute_effect, format_human_output, load_records, read_records, reshape,
    test_sizes,
};

// Re-export report types
pub use transferstat_report::{
    ChartStyle, ComparisonRow, OutputFormat, Report, SizeTestResult, generate_csv_report,
    generate_json_report, render_bar_chart,
};

// Re-export stats
pub use transferstat_stats::{
    EffectInterpretation, EffectSize, GroupSummary, TTestResult, compute_effect_size,
    compute_group_summary, students_t_test,
};

/// Run the transferstat CLI.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     transferstat::run()
/// }
/// ```
pub use transferstat_cli::run;
