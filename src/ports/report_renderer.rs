//! ReportRenderer port - Interface for presenting ranking results.

use crate::domain::analysis::{McdaReport, Scenario};
use crate::domain::foundation::DomainError;

/// Port for turning a report into displayable output.
///
/// Implementations must list alternatives in the order the scenario
/// supplied them, keyed by their labels.
pub trait ReportRenderer: Send + Sync {
    /// Render the report for the scenario it was computed from.
    fn render(&self, scenario: &Scenario, report: &McdaReport) -> Result<String, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ReportRenderer) {}
}
