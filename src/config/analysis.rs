//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{AnalysisOptions, TiePolicy, DEFAULT_WEIGHT_TOLERANCE};

/// Pipeline behavior
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Allowed deviation of the weight sum from 1
    #[serde(default = "default_weight_tolerance")]
    pub weight_tolerance: f64,

    /// Reject weights that do not sum to 1
    #[serde(default = "default_enforce_weight_sum")]
    pub enforce_weight_sum: bool,

    /// How equal scores are ranked
    #[serde(default)]
    pub tie_policy: TiePolicy,

    /// Treat values outside SPOTIS bounds as errors instead of warnings
    #[serde(default)]
    pub reject_out_of_bounds: bool,
}

impl AnalysisConfig {
    /// Pipeline options built from this section
    pub fn to_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            weight_tolerance: self.weight_tolerance,
            enforce_weight_sum: self.enforce_weight_sum,
            tie_policy: self.tie_policy,
            reject_out_of_bounds: self.reject_out_of_bounds,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.weight_tolerance > 0.0 && self.weight_tolerance < 0.5) {
            return Err(ValidationError::InvalidWeightTolerance(self.weight_tolerance));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weight_tolerance: default_weight_tolerance(),
            enforce_weight_sum: default_enforce_weight_sum(),
            tie_policy: TiePolicy::default(),
            reject_out_of_bounds: false,
        }
    }
}

fn default_weight_tolerance() -> f64 {
    DEFAULT_WEIGHT_TOLERANCE
}

fn default_enforce_weight_sum() -> bool {
    true
}
