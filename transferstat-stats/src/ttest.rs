//! Two-sample Student's t-test
//!
//! Unpaired, two-tailed test assuming equal variances. The two sample
//! variances are pooled:
//!
//! ```text
//! sp^2 = ((n1 - 1) s1^2 + (n2 - 1) s2^2) / (n1 + n2 - 2)
//! t    = (m1 - m2) / sqrt(sp^2 (1/n1 + 1/n2))
//! p    = 2 S(|t|; n1 + n2 - 2)    (S = 1 - F, the survival function)
//! ```

use crate::summary::{mean, sample_variance};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Outcome of a two-sample t-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    /// t-statistic, positive when the first sample has the larger mean
    #[serde(deserialize_with = "crate::nan_from_null")]
    pub t_statistic: f64,
    /// Two-tailed p-value
    #[serde(deserialize_with = "crate::nan_from_null")]
    pub p_value: f64,
    /// Degrees of freedom (n1 + n2 - 2)
    pub degrees_of_freedom: f64,
}

impl TTestResult {
    fn undefined(degrees_of_freedom: f64) -> Self {
        Self {
            t_statistic: f64::NAN,
            p_value: f64::NAN,
            degrees_of_freedom,
        }
    }

    /// Whether the p-value falls below `alpha`
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Run Student's equal-variance t-test on two independent samples.
///
/// Returns NaN statistics when either side is empty or has a single
/// sample, since the pooled variance is then undefined.
pub fn students_t_test(first: &[f64], second: &[f64]) -> TTestResult {
    let n1 = first.len() as f64;
    let n2 = second.len() as f64;
    let df = n1 + n2 - 2.0;

    if first.is_empty() || second.is_empty() || df <= 0.0 {
        return TTestResult::undefined(df.max(0.0));
    }

    // A single-sample side has an undefined variance, which poisons the pool
    let pooled_variance =
        ((n1 - 1.0) * sample_variance(first) + (n2 - 1.0) * sample_variance(second)) / df;
    let standard_error = (pooled_variance * (1.0 / n1 + 1.0 / n2)).sqrt();

    let t_statistic = (mean(first) - mean(second)) / standard_error;
    if t_statistic.is_nan() {
        return TTestResult::undefined(df);
    }

    let p_value = match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => 2.0 * dist.sf(t_statistic.abs()),
        Err(_) => f64::NAN,
    };

    TTestResult {
        t_statistic,
        p_value,
        degrees_of_freedom: df,
    }
}
