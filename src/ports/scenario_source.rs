//! ScenarioSource port - Interface for supplying decision problems.
//!
//! The ranking core never reads files or embeds data sets; a source hands it
//! a complete `Scenario` (labels, criteria, matrix, bounds).

use crate::domain::analysis::Scenario;
use crate::domain::foundation::DomainError;

/// Port for loading a decision problem.
///
/// Implementations must:
/// - Return a scenario with one label per matrix row
/// - Report missing or unreadable input as `DomainError`
/// - Not validate numeric content (the pipeline does that)
///
/// # Example
///
/// ```ignore
/// let scenario = source.load()?;
/// let input = scenario.analysis_input()?;
/// ```
pub trait ScenarioSource: Send + Sync {
    /// Load the scenario.
    fn load(&self) -> Result<Scenario, DomainError>;

    /// Human-readable origin of the scenario, for logs.
    fn describe(&self) -> String;
}
