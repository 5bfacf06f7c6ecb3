//! Measurement Loading
//!
//! Reads the headered measurements CSV. Column order does not matter and
//! extra columns are ignored; `bytes`, `k` and `time` are required.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One benchmark measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Concurrency level
    pub k: i64,
    /// Message size in bytes
    pub bytes: u64,
    /// Elapsed transfer time in seconds
    pub time: f64,
}

/// Errors from loading measurements
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Input file missing or unreadable
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        /// File that could not be opened
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
    /// Missing column or a value that does not parse
    #[error("malformed measurements in {}: {source}", .path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Position and cause of the bad record
        #[source]
        source: csv::Error,
    },
}

/// Load every record of the CSV file at `path`
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let records = read_records(file).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), records = records.len(), "loaded measurements");
    Ok(records)
}

/// Parse records from any CSV source with a header row
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = reader
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!(records = records.len(), "parsed csv");
    Ok(records)
}
