//! Built-in reference scenario: five investment projects, four criteria.

use crate::domain::analysis::{CriterionSpec, Scenario};
use crate::domain::foundation::{CriterionDirection, DomainError};
use crate::ports::ScenarioSource;

/// Project selection problem used as the default input.
///
/// Criteria: cost (min, 0.3), profit (max, 0.4), time (min, 0.2),
/// risk (min, 0.1), with SPOTIS bounds wide enough to hold every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceScenario;

impl ReferenceScenario {
    pub fn scenario() -> Scenario {
        Scenario {
            name: "project-selection".to_string(),
            alternatives: ["A1", "A2", "A3", "A4", "A5"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            criteria: vec![
                CriterionSpec::new("Cost", CriterionDirection::Minimize, 0.3)
                    .with_bounds(90000.0, 130000.0),
                CriterionSpec::new("Profit", CriterionDirection::Maximize, 0.4)
                    .with_bounds(40000.0, 80000.0),
                CriterionSpec::new("Time", CriterionDirection::Minimize, 0.2).with_bounds(18.0, 40.0),
                CriterionSpec::new("Risk", CriterionDirection::Minimize, 0.1).with_bounds(0.1, 0.6),
            ],
            matrix: vec![
                vec![100000.0, 50000.0, 24.0, 0.3],
                vec![120000.0, 70000.0, 36.0, 0.4],
                vec![110000.0, 60000.0, 30.0, 0.2],
                vec![95000.0, 45000.0, 20.0, 0.5],
                vec![105000.0, 65000.0, 28.0, 0.35],
            ],
        }
    }
}

impl ScenarioSource for ReferenceScenario {
    fn load(&self) -> Result<Scenario, DomainError> {
        Ok(Self::scenario())
    }

    fn describe(&self) -> String {
        "built-in reference scenario".to_string()
    }
}
