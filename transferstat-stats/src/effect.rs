//! Effect Size
//!
//! Cohen's d over a set of paired differences: the mean difference divided
//! by the sample standard deviation of the differences.

use crate::summary::{mean, sample_std_dev};
use serde::{Deserialize, Serialize};

/// Cohen's d with its magnitude interpretation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectSize {
    /// mean(differences) / sample_std_dev(differences)
    #[serde(deserialize_with = "crate::nan_from_null")]
    pub cohens_d: f64,
    /// Number of differences the value was computed over
    pub differences: usize,
    /// Magnitude bucket for `cohens_d`
    pub interpretation: EffectInterpretation,
}

/// Interpretation of effect size magnitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectInterpretation {
    /// |d| < 0.2 - negligible difference
    Negligible,
    /// 0.2 <= |d| < 0.5 - small difference
    Small,
    /// 0.5 <= |d| < 0.8 - medium difference
    Medium,
    /// |d| >= 0.8 - large difference
    Large,
    /// d is NaN (fewer than two differences, or no spread and no mean)
    Undefined,
}

impl std::fmt::Display for EffectInterpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectInterpretation::Negligible => write!(f, "negligible"),
            EffectInterpretation::Small => write!(f, "small"),
            EffectInterpretation::Medium => write!(f, "medium"),
            EffectInterpretation::Large => write!(f, "large"),
            EffectInterpretation::Undefined => write!(f, "undefined"),
        }
    }
}

/// Compute Cohen's d over `differences`
pub fn compute_effect_size(differences: &[f64]) -> EffectSize {
    let cohens_d = mean(differences) / sample_std_dev(differences);
    EffectSize {
        cohens_d,
        differences: differences.len(),
        interpretation: interpret_effect_size(cohens_d),
    }
}

/// Interpret effect size magnitude using Cohen's conventions
pub fn interpret_effect_size(d: f64) -> EffectInterpretation {
    if d.is_nan() {
        return EffectInterpretation::Undefined;
    }
    let abs_d = d.abs();
    if abs_d < 0.2 {
        EffectInterpretation::Negligible
    } else if abs_d < 0.5 {
        EffectInterpretation::Small
    } else if abs_d < 0.8 {
        EffectInterpretation::Medium
    } else {
        EffectInterpretation::Large
    }
}
