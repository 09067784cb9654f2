//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `scenario` - Scenario sources (built-in reference problem, YAML/JSON files)
//! - `report` - Report renderers (text table, JSON)

pub mod report;
pub mod scenario;

pub use report::{JsonReportRenderer, TextTableRenderer};
pub use scenario::{ReferenceScenario, YamlScenarioSource};
