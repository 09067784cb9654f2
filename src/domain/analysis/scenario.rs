//! Scenario - a labeled decision problem as supplied by a scenario source.

use serde::{Deserialize, Serialize};

use super::{
    AnalysisError, AnalysisInput, Bounds, CriteriaDirections, CriterionBounds, DecisionMatrix,
    WeightVector,
};
use crate::domain::foundation::CriterionDirection;

/// One criterion with its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSpec {
    pub name: String,
    pub direction: CriterionDirection,
    pub weight: f64,
    /// SPOTIS bounds as `[min, max]`.
    #[serde(default)]
    pub bounds: Option<(f64, f64)>,
}

impl CriterionSpec {
    pub fn new(name: impl Into<String>, direction: CriterionDirection, weight: f64) -> Self {
        Self {
            name: name.into(),
            direction,
            weight,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }
}

/// A decision problem: labeled alternatives, criteria, and raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub alternatives: Vec<String>,
    pub criteria: Vec<CriterionSpec>,
    /// One row per alternative, one column per criterion.
    pub matrix: Vec<Vec<f64>>,
}

impl Scenario {
    /// Builds the typed analysis input.
    ///
    /// # Errors
    /// - Label count differs from row count: `ShapeMismatch`
    /// - A criterion lacks bounds: `MissingBounds`
    /// - Any construction error of the matrix or bounds
    pub fn analysis_input(&self) -> Result<AnalysisInput, AnalysisError> {
        let matrix = DecisionMatrix::new(self.matrix.clone())?;

        if self.alternatives.len() != matrix.alternative_count() {
            return Err(AnalysisError::shape_mismatch(
                "alternative labels",
                matrix.alternative_count(),
                self.alternatives.len(),
            ));
        }
        if self.criteria.len() != matrix.criterion_count() {
            return Err(AnalysisError::shape_mismatch(
                "criteria",
                matrix.criterion_count(),
                self.criteria.len(),
            ));
        }

        let weights = WeightVector::new(self.criteria.iter().map(|c| c.weight).collect::<Vec<_>>());
        let directions =
            CriteriaDirections::new(self.criteria.iter().map(|c| c.direction).collect::<Vec<_>>());

        let bounds = self
            .criteria
            .iter()
            .map(|c| {
                c.bounds
                    .map(CriterionBounds::from)
                    .ok_or_else(|| AnalysisError::MissingBounds {
                        criterion: c.name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AnalysisInput::new(
            matrix,
            weights,
            directions,
            Bounds::new(bounds)?,
        ))
    }

    pub fn criterion_names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name.as_str()).collect()
    }
}
