#![warn(missing_docs)]
//! transferstat Report - Reporting and Visualization
//!
//! Generates various output formats:
//! - JSON (machine-readable, full report)
//! - CSV (spreadsheet-compatible, one row per message size)
//! - SVG (grouped bar chart with confidence error bars)
//!
//! Human-readable terminal output lives in the CLI crate.

mod chart;
mod csv;
mod json;
mod report;

pub use chart::{BarSeries, ChartData, ChartStyle, Theme, render_bar_chart};
pub use self::csv::generate_csv_report;
pub use json::generate_json_report;
pub use report::{
    AggregateRow, ComparisonRow, GroupKey, Report, ReportMeta, SampleInfo, SizeTestResult,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Full report as pretty-printed JSON
    Json,
    /// CSV for spreadsheets
    Csv,
    /// Human-readable terminal output
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
