//! Analysis handlers.
//!
//! Handlers that load a decision problem, rank it, and render the result.

mod run_analysis_handler;

pub use run_analysis_handler::{RunAnalysisHandler, RunAnalysisResult};
