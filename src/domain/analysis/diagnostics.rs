//! Non-fatal conditions reported alongside a ranking result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A condition that does not stop the analysis but should be surfaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// Every alternative has the same value on this criterion; it is
    /// normalized to zero and contributes nothing to TOPSIS.
    DegenerateCriterion { criterion: usize, value: f64 },

    /// A raw value lies outside its criterion's SPOTIS bounds. The distance
    /// is still computed and may exceed 1.
    OutOfBoundsValue {
        alternative: usize,
        criterion: usize,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl AnalysisWarning {
    pub fn criterion(&self) -> usize {
        match self {
            AnalysisWarning::DegenerateCriterion { criterion, .. }
            | AnalysisWarning::OutOfBoundsValue { criterion, .. } => *criterion,
        }
    }
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisWarning::DegenerateCriterion { criterion, value } => write!(
                f,
                "criterion {} is constant ({}) across all alternatives",
                criterion, value
            ),
            AnalysisWarning::OutOfBoundsValue {
                alternative,
                criterion,
                value,
                min,
                max,
            } => write!(
                f,
                "alternative {} has value {} outside bounds [{}, {}] of criterion {}",
                alternative, value, min, max, criterion
            ),
        }
    }
}
