#![warn(missing_docs)]
//! transferstat CLI Library
//!
//! Command-line front end for the transfer benchmark report. Reads a
//! measurements CSV (`bytes`, `k`, `time`) and either prints the k=1 vs k=8
//! statistics report or renders the mean-time bar chart.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     transferstat_cli::run()
//! }
//! ```

mod config;
mod pipeline;

pub use config::*;
pub use pipeline::{
    BASELINE_K, CANDIDATE_K, DataError, Record, aggregate, build_chart_data, build_report,
    compute_effect, distinct_sizes, format_human_output, group_samples, load_records,
    mean_differences, read_records, reshape, test_sizes,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use transferstat_report::{
    OutputFormat, generate_csv_report, generate_json_report, render_bar_chart,
};

/// transferstat CLI arguments
#[derive(Parser, Debug)]
#[command(name = "transferstat")]
#[command(
    author,
    version,
    about = "transferstat - k=1 vs k=8 transfer time statistics"
)]
pub struct Cli {
    /// Optional subcommand (Report, Chart); defaults to Report
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Measurements CSV (columns: bytes, k, time)
    /// Defaults to config or ./logs/results.csv
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Config file; defaults to transferstat.toml found by walking up from the current directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the statistics report (default)
    Report {
        /// Output format: human, json, csv
        #[arg(long)]
        format: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the mean transfer time bar chart as SVG
    Chart {
        /// SVG file to write; defaults to config or target/transferstat/transfer_time.svg
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the transferstat CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the transferstat CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the report
    let filter = if cli.verbose {
        "transferstat=debug"
    } else {
        "transferstat=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;
    match resolve(&cli, &config) {
        Invocation::Report {
            input,
            format,
            output,
        } => run_report(&input, &format, output.as_deref()),
        Invocation::Chart {
            input,
            output,
            visuals,
        } => run_chart(&input, &output, &visuals),
    }
}

/// A command with every setting filled in from flags, config or defaults
#[derive(Debug, Clone)]
pub enum Invocation {
    /// Print or write the statistics report
    Report {
        /// Measurements CSV
        input: PathBuf,
        /// Output format name, parsed by [`run_report`]
        format: String,
        /// Report file, stdout when absent
        output: Option<PathBuf>,
    },
    /// Render the bar chart
    Chart {
        /// Measurements CSV
        input: PathBuf,
        /// SVG file to write
        output: PathBuf,
        /// Chart dimensions and theme
        visuals: VisualsConfig,
    },
}

/// Load the configuration for a run.
///
/// An explicit path must load; otherwise the discovered file is used, or
/// the defaults when none is found or it cannot be read.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<TransferConfig> {
    match explicit {
        Some(path) => TransferConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(TransferConfig::discover().unwrap_or_default()),
    }
}

/// Merge command-line flags over `config`. Flags always win.
pub fn resolve(cli: &Cli, config: &TransferConfig) -> Invocation {
    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.input.path));

    match &cli.command {
        Some(Commands::Report { format, output }) => Invocation::Report {
            input,
            format: format.clone().unwrap_or_else(|| config.output.format.clone()),
            output: output.clone(),
        },
        Some(Commands::Chart { output }) => Invocation::Chart {
            input,
            output: output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.output.chart_path)),
            visuals: config.visuals.clone(),
        },
        None => Invocation::Report {
            input,
            format: config.output.format.clone(),
            output: None,
        },
    }
}

/// Load `input`, build the report and write it in `format` to `output` or stdout
pub fn run_report(input: &Path, format: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let format: OutputFormat = format.parse().map_err(anyhow::Error::msg)?;
    let records = load_records(input)?;
    let report = build_report(&records, input);

    let rendered = match format {
        OutputFormat::Human => format_human_output(&report),
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Csv => generate_csv_report(&report)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Load `input`, aggregate it and write the bar chart SVG to `output`
pub fn run_chart(input: &Path, output: &Path, visuals: &VisualsConfig) -> anyhow::Result<()> {
    let style = visuals.chart_style()?;
    let records = load_records(input)?;
    let data = build_chart_data(&aggregate(&records));
    let svg = render_bar_chart(&data, &style);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(output, svg)
        .with_context(|| format!("failed to write chart to {}", output.display()))?;

    tracing::info!(
        path = %output.display(),
        sizes = data.categories.len(),
        "chart written"
    );
    Ok(())
}
