#![warn(missing_docs)]
//! transferstat Statistical Engine
//!
//! Numeric core of the transfer benchmark report:
//! - Per-group summaries (mean, Bessel-corrected std dev, 95% CI half-width)
//! - Student's two-sample t-test with pooled variance
//! - Cohen's d effect size over paired per-size differences
//!
//! Degenerate inputs never panic. Undefined quantities (a one-sample
//! standard deviation, a t-test with no degrees of freedom) come back as NaN
//! so callers can surface them in the report.

mod effect;
mod nan;
mod summary;
mod ttest;

pub use effect::{
    EffectInterpretation, EffectSize, compute_effect_size, interpret_effect_size,
};
pub use nan::nan_from_null;
pub use summary::{
    GroupSummary, compute_group_summary, mean, sample_std_dev, sample_variance,
};
pub use ttest::{TTestResult, students_t_test};

/// z-score for a two-sided 95% normal interval
pub const Z_95: f64 = 1.96;

/// Two-sided 95% confidence half-width of a mean: `1.96 * std_dev / sqrt(n)`
pub fn ci_half_width(std_dev: f64, count: usize) -> f64 {
    Z_95 * std_dev / (count as f64).sqrt()
}
