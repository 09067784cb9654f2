//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ScenarioSource` - Supplies the decision problem (matrix, criteria, labels)
//! - `ReportRenderer` - Presents the ranked-score table

mod report_renderer;
mod scenario_source;

pub use report_renderer::ReportRenderer;
pub use scenario_source::ScenarioSource;
