//! Plain-text report renderer.
//!
//! Output layout:
//!
//! ```text
//! Scenario: project-selection
//!
//! Criteria:
//!   Cost: minimized, weight = 0.3
//!   Profit: maximized, weight = 0.4
//!
//! Alternative  TOPSIS score  SPOTIS score  TOPSIS rank  SPOTIS rank
//! A1                 0.4767        0.4696            4            2
//! ```

use std::fmt::Write;

use crate::domain::analysis::{AnalysisWarning, McdaReport, Scenario};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ReportRenderer;

const HEADERS: [&str; 5] = [
    "Alternative",
    "TOPSIS score",
    "SPOTIS score",
    "TOPSIS rank",
    "SPOTIS rank",
];

/// Renders a report as an aligned text table.
#[derive(Debug, Clone, Copy)]
pub struct TextTableRenderer {
    precision: usize,
}

impl TextTableRenderer {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    fn criterion_name(scenario: &Scenario, index: usize) -> String {
        scenario
            .criteria
            .get(index)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("#{}", index))
    }

    fn alternative_name(scenario: &Scenario, index: usize) -> String {
        scenario
            .alternatives
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("#{}", index))
    }

    fn describe_warning(scenario: &Scenario, warning: &AnalysisWarning) -> String {
        match warning {
            AnalysisWarning::DegenerateCriterion { criterion, value } => format!(
                "{} is constant ({}) across all alternatives",
                Self::criterion_name(scenario, *criterion),
                value
            ),
            AnalysisWarning::OutOfBoundsValue {
                alternative,
                criterion,
                value,
                min,
                max,
            } => format!(
                "{} has {} = {} outside bounds [{}, {}]",
                Self::alternative_name(scenario, *alternative),
                Self::criterion_name(scenario, *criterion),
                value,
                min,
                max
            ),
        }
    }
}

impl Default for TextTableRenderer {
    fn default() -> Self {
        Self::new(4)
    }
}

impl ReportRenderer for TextTableRenderer {
    fn render(&self, scenario: &Scenario, report: &McdaReport) -> Result<String, DomainError> {
        let rows = report.rows(&scenario.alternatives)?;
        let fmt_err = |e: std::fmt::Error| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to render report: {}", e))
        };

        let mut out = String::new();
        if !scenario.name.is_empty() {
            writeln!(out, "Scenario: {}", scenario.name).map_err(fmt_err)?;
            writeln!(out).map_err(fmt_err)?;
        }

        writeln!(out, "Criteria:").map_err(fmt_err)?;
        for criterion in &scenario.criteria {
            writeln!(
                out,
                "  {}: {}, weight = {}",
                criterion.name,
                criterion.direction.label(),
                criterion.weight
            )
            .map_err(fmt_err)?;
        }
        writeln!(out).map_err(fmt_err)?;

        let label_width = rows
            .iter()
            .map(|r| r.label.chars().count())
            .chain(std::iter::once(HEADERS[0].len()))
            .max()
            .unwrap_or(HEADERS[0].len());
        let p = self.precision;

        writeln!(
            out,
            "{:<lw$}  {:>w1$}  {:>w2$}  {:>w3$}  {:>w4$}",
            HEADERS[0],
            HEADERS[1],
            HEADERS[2],
            HEADERS[3],
            HEADERS[4],
            lw = label_width,
            w1 = HEADERS[1].len(),
            w2 = HEADERS[2].len(),
            w3 = HEADERS[3].len(),
            w4 = HEADERS[4].len(),
        )
        .map_err(fmt_err)?;

        for row in &rows {
            writeln!(
                out,
                "{:<lw$}  {:>w1$.p$}  {:>w2$.p$}  {:>w3$}  {:>w4$}",
                row.label,
                row.topsis_score,
                row.spotis_score,
                row.topsis_rank,
                row.spotis_rank,
                lw = label_width,
                w1 = HEADERS[1].len(),
                w2 = HEADERS[2].len(),
                w3 = HEADERS[3].len(),
                w4 = HEADERS[4].len(),
                p = p,
            )
            .map_err(fmt_err)?;
        }

        if report.has_warnings() {
            writeln!(out).map_err(fmt_err)?;
            writeln!(out, "Warnings:").map_err(fmt_err)?;
            for warning in &report.warnings {
                writeln!(out, "  - {}", Self::describe_warning(scenario, warning))
                    .map_err(fmt_err)?;
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ReferenceScenario;
    use crate::domain::analysis::McdaPipeline;

    fn reference_output() -> String {
        let scenario = ReferenceScenario::scenario();
        let input = scenario.analysis_input().unwrap();
        let report = McdaPipeline::default().analyze(&input).unwrap();
        TextTableRenderer::default().render(&scenario, &report).unwrap()
    }

    #[test]
    fn lists_criteria_with_direction_and_weight() {
        let output = reference_output();
        assert!(output.contains("Criteria:"));
        assert!(output.contains("  Cost: minimized, weight = 0.3"));
        assert!(output.contains("  Profit: maximized, weight = 0.4"));
        assert!(output.contains("  Risk: minimized, weight = 0.1"));
    }

    #[test]
    fn prints_one_row_per_alternative_in_input_order() {
        let output = reference_output();
        let rows: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with('A') && !l.starts_with("Alternative"))
            .collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].starts_with("A1"));
        assert!(rows[4].starts_with("A5"));
    }

    #[test]
    fn formats_scores_and_ranks() {
        let output = reference_output();
        let a5 = output.lines().find(|l| l.starts_with("A5")).unwrap();
        let cells: Vec<&str> = a5.split_whitespace().collect();
        assert_eq!(cells, vec!["A5", "0.6778", "0.4034", "1", "1"]);
    }

    #[test]
    fn omits_warning_section_when_clean() {
        assert!(!reference_output().contains("Warnings:"));
    }

    #[test]
    fn names_criteria_in_warnings() {
        let mut scenario = ReferenceScenario::scenario();
        for row in scenario.matrix.iter_mut() {
            row[3] = 0.25;
        }
        let input = scenario.analysis_input().unwrap();
        let report = McdaPipeline::default().analyze(&input).unwrap();

        let output = TextTableRenderer::new(2).render(&scenario, &report).unwrap();
        assert!(output.contains("Warnings:"));
        assert!(output.contains("Risk is constant (0.25)"));
    }

    #[test]
    fn rejects_label_mismatch() {
        let scenario = ReferenceScenario::scenario();
        let input = scenario.analysis_input().unwrap();
        let report = McdaPipeline::default().analyze(&input).unwrap();

        let mut short = scenario.clone();
        short.alternatives.pop();
        let err = TextTableRenderer::default().render(&short, &report).unwrap_err();
        assert_eq!(err.code, ErrorCode::ShapeMismatch);
    }
}
