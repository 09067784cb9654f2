//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Line format of emitted events
    #[serde(default)]
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format == LogFormat::Json
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("logging.log_level"));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info,choice_ranker=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.log_level, "info,choice_ranker=debug");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(!config.is_json());
    }

    #[test]
    fn test_blank_log_level_rejected() {
        let config = LoggingConfig {
            log_level: "  ".to_string(),
            format: LogFormat::Json,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("logging.log_level"))
        );
    }
}
