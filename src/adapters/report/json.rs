//! JSON report renderer.

use serde::Serialize;

use crate::domain::analysis::{AlternativeResult, AnalysisWarning, McdaReport, Scenario};
use crate::domain::foundation::{AnalysisId, DomainError, ErrorCode, Timestamp};
use crate::ports::ReportRenderer;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    scenario: &'a str,
    analysis_id: AnalysisId,
    computed_at: Timestamp,
    results: Vec<AlternativeResult>,
    warnings: &'a [AnalysisWarning],
}

/// Renders a report as a JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportRenderer {
    pretty: bool,
}

impl JsonReportRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, scenario: &Scenario, report: &McdaReport) -> Result<String, DomainError> {
        let doc = JsonReport {
            scenario: &scenario.name,
            analysis_id: report.analysis_id,
            computed_at: report.computed_at,
            results: report.rows(&scenario.alternatives)?,
            warnings: &report.warnings,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&doc)
        } else {
            serde_json::to_string(&doc)
        };

        rendered.map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to serialize report: {}", e),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ReferenceScenario;
    use crate::domain::analysis::McdaPipeline;
    use serde_json::Value;

    fn render(renderer: JsonReportRenderer) -> (McdaReport, Value) {
        let scenario = ReferenceScenario::scenario();
        let input = scenario.analysis_input().unwrap();
        let report = McdaPipeline::default().analyze(&input).unwrap();
        let output = renderer.render(&scenario, &report).unwrap();
        (report, serde_json::from_str(&output).unwrap())
    }

    #[test]
    fn emits_results_keyed_by_label() {
        let (_, doc) = render(JsonReportRenderer::new());

        assert_eq!(doc["scenario"], "project-selection");
        let results = doc["results"].as_array().unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(results[0]["label"], "A1");
        assert_eq!(results[4]["label"], "A5");
        assert_eq!(results[4]["topsis_rank"], 1);
        assert_eq!(results[4]["spotis_rank"], 1);
    }

    #[test]
    fn carries_report_identity() {
        let (report, doc) = render(JsonReportRenderer::pretty());

        assert_eq!(doc["analysis_id"], report.analysis_id.to_string());
        assert!(doc["computed_at"].is_string());
        assert_eq!(doc["warnings"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn pretty_output_spans_lines() {
        let scenario = ReferenceScenario::scenario();
        let report = McdaPipeline::default()
            .analyze(&scenario.analysis_input().unwrap())
            .unwrap();

        let compact = JsonReportRenderer::new().render(&scenario, &report).unwrap();
        let pretty = JsonReportRenderer::pretty().render(&scenario, &report).unwrap();
        assert_eq!(compact.lines().count(), 1);
        assert!(pretty.lines().count() > 1);
    }

    #[test]
    fn serializes_warnings_with_kind_tag() {
        let mut scenario = ReferenceScenario::scenario();
        scenario.matrix[0][0] = 150000.0;
        let report = McdaPipeline::default()
            .analyze(&scenario.analysis_input().unwrap())
            .unwrap();

        let output = JsonReportRenderer::new().render(&scenario, &report).unwrap();
        let doc: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(doc["warnings"][0]["kind"], "out_of_bounds_value");
        assert_eq!(doc["warnings"][0]["alternative"], 0);
    }
}
