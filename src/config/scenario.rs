//! Scenario input and report output configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

const MAX_PRECISION: usize = 12;

/// Where the decision problem comes from and how results are shown
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    /// YAML or JSON scenario file; the built-in reference scenario when unset
    pub path: Option<PathBuf>,

    /// Report format written to stdout
    #[serde(default)]
    pub output: OutputFormat,

    /// Decimal places for scores in the text table
    #[serde(default = "default_precision")]
    pub precision: usize,
}

/// Report format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl ScenarioConfig {
    pub fn uses_reference(&self) -> bool {
        self.path.is_none()
    }

    /// Validate scenario configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision > MAX_PRECISION {
            return Err(ValidationError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            path: None,
            output: OutputFormat::default(),
            precision: default_precision(),
        }
    }
}

fn default_precision() -> usize {
    4
}
