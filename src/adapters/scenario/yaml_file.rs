//! YAML Scenario Source
//!
//! Reads a scenario from a YAML or JSON file. Files ending in `.json` are
//! parsed as JSON, everything else as YAML.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::analysis::Scenario;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ScenarioSource;

/// Scenario source backed by a single file.
#[derive(Debug, Clone)]
pub struct YamlScenarioSource {
    path: PathBuf,
}

impl YamlScenarioSource {
    /// Create a source for the given file
    ///
    /// # Example
    /// ```ignore
    /// let source = YamlScenarioSource::new("./scenarios/projects.yaml");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    fn parse(&self, content: &str) -> Result<Scenario, String> {
        if self.is_json() {
            serde_json::from_str(content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(content).map_err(|e| e.to_string())
        }
    }
}

impl ScenarioSource for YamlScenarioSource {
    fn load(&self) -> Result<Scenario, DomainError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            let code = if e.kind() == ErrorKind::NotFound {
                ErrorCode::ScenarioNotFound
            } else {
                ErrorCode::ScenarioUnreadable
            };
            DomainError::new(code, format!("Failed to read scenario: {}", e))
                .with_detail("path", self.path.display().to_string())
        })?;

        self.parse(&content).map_err(|e| {
            DomainError::new(
                ErrorCode::ScenarioUnreadable,
                format!("Failed to parse scenario: {}", e),
            )
            .with_detail("path", self.path.display().to_string())
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
