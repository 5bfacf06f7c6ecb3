//! NaN-aware serde support
//!
//! JSON has no NaN: serde_json writes non-finite floats as `null`. Fields that
//! may carry an undefined statistic read `null` back as NaN.

use serde::{Deserialize, Deserializer};

/// Deserialize an `f64` that may have been written as `null`
pub fn nan_from_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
