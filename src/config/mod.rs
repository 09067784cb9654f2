//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CHOICE_RANKER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use choice_ranker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//!
//! println!("Tie policy: {:?}", config.analysis.tie_policy);
//! ```

mod analysis;
mod error;
mod logging;
mod scenario;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use scenario::{OutputFormat, ScenarioConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// configuration that ranks the built-in reference scenario.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pipeline options (weight tolerance, tie policy, bounds handling)
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Scenario file and report format
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CHOICE_RANKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    /// 5. Validates every section
    ///
    /// # Environment Variable Format
    ///
    /// - `CHOICE_RANKER__ANALYSIS__TIE_POLICY=ordinal` -> `analysis.tie_policy = ordinal`
    /// - `CHOICE_RANKER__SCENARIO__PATH=./projects.yaml` -> `scenario.path = ./projects.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if values cannot be parsed into expected
    /// types, and `ConfigError::ValidationFailed` if a parsed value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHOICE_RANKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.logging.validate()?;
        self.scenario.validate()?;
        Ok(())
    }
}
