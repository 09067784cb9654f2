//! Scenario sources.

mod reference;
mod yaml_file;

pub use reference::ReferenceScenario;
pub use yaml_file::YamlScenarioSource;
