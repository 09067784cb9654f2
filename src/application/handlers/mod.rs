//! Command handlers.

pub mod analysis;

pub use analysis::{RunAnalysisHandler, RunAnalysisResult};
