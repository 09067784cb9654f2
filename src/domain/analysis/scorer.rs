//! Scorer capability shared by the ranking methods.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    AnalysisError, Bounds, CriteriaDirections, DecisionMatrix, Orientation, ScoreVector,
    SpotisScorer, TopsisScorer, WeightVector,
};

/// Everything one analysis run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub matrix: DecisionMatrix,
    pub weights: WeightVector,
    pub directions: CriteriaDirections,
    pub bounds: Bounds,
}

impl AnalysisInput {
    pub fn new(
        matrix: DecisionMatrix,
        weights: WeightVector,
        directions: CriteriaDirections,
        bounds: Bounds,
    ) -> Self {
        Self {
            matrix,
            weights,
            directions,
            bounds,
        }
    }

    /// Checks that every per-criterion vector matches the matrix width and
    /// that the weights are usable.
    pub fn validate(&self, weight_sum_tolerance: Option<f64>) -> Result<(), AnalysisError> {
        let n = self.matrix.criterion_count();
        self.weights.validate(n, weight_sum_tolerance)?;
        self.directions.validate(n)?;
        self.bounds.validate(n)?;
        Ok(())
    }
}

/// Ranking method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum McdaMethod {
    Topsis,
    Spotis,
}

impl McdaMethod {
    pub const ALL: [McdaMethod; 2] = [McdaMethod::Topsis, McdaMethod::Spotis];

    /// Returns the scorer implementing this method.
    pub fn scorer(&self) -> &'static dyn Scorer {
        match self {
            McdaMethod::Topsis => &TopsisScorer,
            McdaMethod::Spotis => &SpotisScorer,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            McdaMethod::Topsis => "TOPSIS",
            McdaMethod::Spotis => "SPOTIS",
        }
    }
}

impl fmt::Display for McdaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A method that turns an analysis input into one score per alternative.
pub trait Scorer: Send + Sync {
    fn method(&self) -> McdaMethod;

    fn orientation(&self) -> Orientation;

    fn evaluate(&self, input: &AnalysisInput) -> Result<ScoreVector, AnalysisError>;
}

impl Scorer for TopsisScorer {
    fn method(&self) -> McdaMethod {
        McdaMethod::Topsis
    }

    fn orientation(&self) -> Orientation {
        Self::ORIENTATION
    }

    fn evaluate(&self, input: &AnalysisInput) -> Result<ScoreVector, AnalysisError> {
        TopsisScorer::score(&input.matrix, &input.weights, &input.directions)
    }
}

impl Scorer for SpotisScorer {
    fn method(&self) -> McdaMethod {
        McdaMethod::Spotis
    }

    fn orientation(&self) -> Orientation {
        Self::ORIENTATION
    }

    fn evaluate(&self, input: &AnalysisInput) -> Result<ScoreVector, AnalysisError> {
        SpotisScorer::score(&input.matrix, &input.weights, &input.directions, &input.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_input() -> AnalysisInput {
        AnalysisInput::new(
            DecisionMatrix::new(vec![vec![1.0, 10.0], vec![3.0, 5.0]]).unwrap(),
            WeightVector::new(vec![0.5, 0.5]),
            CriteriaDirections::from_signs(&[1, -1]).unwrap(),
            Bounds::from_pairs(&[(0.0, 4.0), (0.0, 20.0)]).unwrap(),
        )
    }

    #[test]
    fn method_selects_matching_scorer() {
        for method in McdaMethod::ALL {
            assert_eq!(method.scorer().method(), method);
        }
    }

    #[test]
    fn scorers_report_their_orientation() {
        assert_eq!(McdaMethod::Topsis.scorer().orientation(), Orientation::HigherIsBetter);
        assert_eq!(McdaMethod::Spotis.scorer().orientation(), Orientation::LowerIsBetter);
    }

    #[test]
    fn evaluate_matches_direct_call() {
        let input = small_input();
        let via_trait = McdaMethod::Spotis.scorer().evaluate(&input).unwrap();
        let direct =
            SpotisScorer::score(&input.matrix, &input.weights, &input.directions, &input.bounds)
                .unwrap();
        assert_eq!(via_trait, direct);

        let via_trait = McdaMethod::Topsis.scorer().evaluate(&input).unwrap();
        assert_eq!(via_trait.values(), &[0.0, 1.0]);
    }

    #[test]
    fn validate_rejects_mismatched_bounds() {
        let mut input = small_input();
        input.bounds = Bounds::from_pairs(&[(0.0, 1.0)]).unwrap();
        assert_eq!(
            input.validate(None),
            Err(AnalysisError::shape_mismatch("bounds", 2, 1))
        );
    }

    #[test]
    fn method_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&McdaMethod::Topsis).unwrap(), "\"topsis\"");
        assert_eq!(McdaMethod::Spotis.to_string(), "SPOTIS");
    }
}
