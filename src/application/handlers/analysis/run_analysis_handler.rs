//! RunAnalysisHandler - Loads a scenario, ranks it, and renders the report.
//!
//! Flow:
//! 1. Fetch the scenario from the configured source
//! 2. Build the typed analysis input (labels, weights, directions, bounds)
//! 3. Run TOPSIS and SPOTIS through the pipeline
//! 4. Render the report for display

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::analysis::{McdaPipeline, McdaReport, Scenario};
use crate::domain::foundation::DomainError;
use crate::ports::{ReportRenderer, ScenarioSource};

/// Everything produced by one run.
#[derive(Debug, Clone)]
pub struct RunAnalysisResult {
    pub scenario: Scenario,
    pub report: McdaReport,
    /// Output of the renderer.
    pub rendered: String,
}

/// Handler wiring a scenario source and a renderer around the pipeline.
pub struct RunAnalysisHandler {
    source: Arc<dyn ScenarioSource>,
    renderer: Arc<dyn ReportRenderer>,
    pipeline: McdaPipeline,
}

impl RunAnalysisHandler {
    pub fn new(
        source: Arc<dyn ScenarioSource>,
        renderer: Arc<dyn ReportRenderer>,
        pipeline: McdaPipeline,
    ) -> Self {
        Self {
            source,
            renderer,
            pipeline,
        }
    }

    pub fn handle(&self) -> Result<RunAnalysisResult, DomainError> {
        info!(source = %self.source.describe(), "Loading scenario");
        let scenario = self.source.load()?;

        let input = scenario.analysis_input()?;
        let report = self.pipeline.analyze(&input)?;

        let rendered = self.renderer.render(&scenario, &report)?;

        debug!(
            analysis_id = %report.analysis_id,
            scenario = %scenario.name,
            best_topsis = ?report.best_topsis(),
            best_spotis = ?report.best_spotis(),
            "Analysis rendered"
        );

        Ok(RunAnalysisResult {
            scenario,
            report,
            rendered,
        })
    }
}
