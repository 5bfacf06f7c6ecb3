//! Report from in-memory measurements
//!
//! Builds the k=1 vs k=8 report from CSV text without touching the
//! filesystem, then prints it in all three formats.
//!
//! Run with:
//!   cargo run --example inline_report

use std::path::Path;
use transferstat::{
    build_report, format_human_output, generate_csv_report, generate_json_report, read_records,
};

const MEASUREMENTS: &str = "\
bytes,k,time
64,1,1.02
64,1,0.98
64,1,1.05
64,8,0.51
64,8,0.49
64,8,0.55
4096,1,2.40
4096,1,2.55
4096,1,2.47
4096,8,0.92
4096,8,1.01
4096,8,0.97
65536,1,9.80
65536,1,10.10
65536,1,9.95
65536,8,3.10
65536,8,3.30
65536,8,3.05
";

fn main() -> anyhow::Result<()> {
    let records = read_records(MEASUREMENTS.as_bytes())?;
    let report = build_report(&records, Path::new("<inline>"));

    println!("{}", format_human_output(&report));
    println!("{}", generate_csv_report(&report)?);
    println!("{}", generate_json_report(&report)?);
    Ok(())
}
