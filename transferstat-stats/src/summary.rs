//! Group Summary Statistics
//!
//! Mean, sample standard deviation and 95% confidence half-width for one
//! (k, bytes) group of transfer times.
//!
//! Unlike a guarded summary, undefined values are NaN rather than zero:
//! an empty group has a NaN mean and a group with fewer than two samples
//! has a NaN standard deviation.

use serde::{Deserialize, Serialize};

/// Summary of one group of samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Arithmetic mean
    #[serde(deserialize_with = "crate::nan_from_null")]
    pub mean: f64,
    /// Sample standard deviation (divisor n - 1)
    #[serde(deserialize_with = "crate::nan_from_null")]
    pub std_dev: f64,
    /// Number of samples
    pub count: usize,
    /// 95% confidence half-width of the mean
    #[serde(deserialize_with = "crate::nan_from_null")]
    pub ci_half_width: f64,
}

/// Arithmetic mean, NaN for an empty slice
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample variance (n - 1 denominator), NaN below two samples
pub fn sample_variance(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let mean = mean(samples);
    let sum_sq = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    sum_sq / (samples.len() - 1) as f64
}

/// Sample standard deviation, NaN below two samples
pub fn sample_std_dev(samples: &[f64]) -> f64 {
    sample_variance(samples).sqrt()
}

/// Summarize a group of samples
pub fn compute_group_summary(samples: &[f64]) -> GroupSummary {
    let std_dev = sample_std_dev(samples);
    GroupSummary {
        mean: mean(samples),
        std_dev,
        count: samples.len(),
        ci_half_width: crate::ci_half_width(std_dev, samples.len()),
    }
}

impl GroupSummary {
    /// Standard error of the mean
    pub fn standard_error(&self) -> f64 {
        self.std_dev / (self.count as f64).sqrt()
    }

    /// Lower and upper bounds of the 95% interval
    pub fn ci_bounds(&self) -> (f64, f64) {
        (self.mean - self.ci_half_width, self.mean + self.ci_half_width)
    }
}
