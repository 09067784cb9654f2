//! Per-criterion inputs: weights, directions, and SPOTIS bounds.

use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::domain::foundation::{CriterionDirection, ValidationError};

/// Default tolerance for the weight sum check.
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-6;

/// Relative importance of each criterion.
///
/// Weights are never renormalized; [`WeightVector::validate`] rejects
/// vectors that are not usable as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn new(weights: impl Into<Vec<f64>>) -> Self {
        Self(weights.into())
    }

    /// Equal weights summing to one.
    pub fn uniform(criteria: usize) -> Self {
        Self(vec![1.0 / criteria as f64; criteria])
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Checks length, sign, and finiteness; when `sum_tolerance` is given,
    /// also requires the weights to sum to one within it.
    pub fn validate(&self, criteria: usize, sum_tolerance: Option<f64>) -> Result<(), AnalysisError> {
        if self.0.len() != criteria {
            return Err(AnalysisError::shape_mismatch("weights", criteria, self.0.len()));
        }

        for (j, &w) in self.0.iter().enumerate() {
            if !w.is_finite() {
                return Err(AnalysisError::invalid_weights(format!(
                    "weight of criterion {} is not finite",
                    j
                )));
            }
            if w < 0.0 {
                return Err(AnalysisError::invalid_weights(format!(
                    "weight of criterion {} is negative ({})",
                    j, w
                )));
            }
        }

        if let Some(tolerance) = sum_tolerance {
            let sum = self.sum();
            if (sum - 1.0).abs() > tolerance {
                return Err(AnalysisError::invalid_weights(format!(
                    "weights sum to {} instead of 1 (tolerance {})",
                    sum, tolerance
                )));
            }
        }

        Ok(())
    }
}

/// Preferred direction of each criterion, aligned with matrix columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaDirections(Vec<CriterionDirection>);

impl CriteriaDirections {
    pub fn new(directions: impl Into<Vec<CriterionDirection>>) -> Self {
        Self(directions.into())
    }

    /// Builds directions from the `1` / `-1` convention.
    pub fn from_signs(signs: &[i8]) -> Result<Self, ValidationError> {
        signs
            .iter()
            .map(|&s| CriterionDirection::try_from_i8(s))
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn values(&self) -> &[CriterionDirection] {
        &self.0
    }

    pub fn get(&self, criterion: usize) -> Option<CriterionDirection> {
        self.0.get(criterion).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self, criteria: usize) -> Result<(), AnalysisError> {
        if self.0.len() != criteria {
            return Err(AnalysisError::shape_mismatch("directions", criteria, self.0.len()));
        }
        Ok(())
    }
}

/// Admissible value range of one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriterionBounds {
    pub min: f64,
    pub max: f64,
}

impl CriterionBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns the bound edge holding the best attainable value.
    pub fn preferred_edge(&self, direction: CriterionDirection) -> f64 {
        match direction {
            CriterionDirection::Maximize => self.max,
            CriterionDirection::Minimize => self.min,
        }
    }

    fn check(&self, criterion: usize) -> Result<(), AnalysisError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(AnalysisError::NonFiniteBound { criterion });
        }
        if self.min == self.max {
            return Err(AnalysisError::ZeroBoundRange {
                criterion,
                value: self.min,
            });
        }
        if self.min > self.max {
            return Err(AnalysisError::InvertedBounds {
                criterion,
                min: self.min,
                max: self.max,
            });
        }
        if !self.range().is_finite() {
            return Err(AnalysisError::RangeOverflow { criterion });
        }
        Ok(())
    }
}

impl From<(f64, f64)> for CriterionBounds {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// SPOTIS reference frame: one validated (min, max) pair per criterion.
///
/// Construction guarantees `min < max` with finite edges, so every bound
/// range is a safe divisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CriterionBounds>", into = "Vec<CriterionBounds>")]
pub struct Bounds(Vec<CriterionBounds>);

impl Bounds {
    pub fn new(bounds: Vec<CriterionBounds>) -> Result<Self, AnalysisError> {
        for (j, b) in bounds.iter().enumerate() {
            b.check(j)?;
        }
        Ok(Self(bounds))
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, AnalysisError> {
        Self::new(pairs.iter().copied().map(CriterionBounds::from).collect())
    }

    pub fn values(&self) -> &[CriterionBounds] {
        &self.0
    }

    pub fn get(&self, criterion: usize) -> Option<&CriterionBounds> {
        self.0.get(criterion)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self, criteria: usize) -> Result<(), AnalysisError> {
        if self.0.len() != criteria {
            return Err(AnalysisError::shape_mismatch("bounds", criteria, self.0.len()));
        }
        Ok(())
    }
}

impl TryFrom<Vec<CriterionBounds>> for Bounds {
    type Error = AnalysisError;

    fn try_from(bounds: Vec<CriterionBounds>) -> Result<Self, Self::Error> {
        Self::new(bounds)
    }
}

impl From<Bounds> for Vec<CriterionBounds> {
    fn from(bounds: Bounds) -> Self {
        bounds.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_summing_to_one_pass() {
        let weights = WeightVector::new(vec![0.3, 0.4, 0.2, 0.1]);
        assert!(weights.validate(4, Some(DEFAULT_WEIGHT_TOLERANCE)).is_ok());
    }

    #[test]
    fn weights_with_wrong_length_fail() {
        let weights = WeightVector::new(vec![0.5, 0.5]);
        assert_eq!(
            weights.validate(3, None),
            Err(AnalysisError::shape_mismatch("weights", 3, 2))
        );
    }

    #[test]
    fn negative_weight_fails() {
        let weights = WeightVector::new(vec![1.2, -0.2]);
        let err = weights.validate(2, None).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidWeights { .. }));
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn non_finite_weight_fails() {
        let weights = WeightVector::new(vec![f64::NAN, 1.0]);
        assert!(matches!(
            weights.validate(2, None),
            Err(AnalysisError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn weight_sum_outside_tolerance_fails_only_when_enforced() {
        let weights = WeightVector::new(vec![0.5, 0.6]);
        assert!(weights.validate(2, Some(1e-6)).is_err());
        assert!(weights.validate(2, None).is_ok());
    }

    #[test]
    fn uniform_weights_sum_to_one() {
        let weights = WeightVector::uniform(3);
        assert!((weights.sum() - 1.0).abs() < 1e-12);
        assert_eq!(weights.len(), 3);
    }

    #[test]
    fn directions_from_signs() {
        let directions = CriteriaDirections::from_signs(&[-1, 1, -1, -1]).unwrap();
        assert_eq!(directions.get(0), Some(CriterionDirection::Minimize));
        assert_eq!(directions.get(1), Some(CriterionDirection::Maximize));
        assert!(CriteriaDirections::from_signs(&[2]).is_err());
    }

    #[test]
    fn directions_validate_length() {
        let directions = CriteriaDirections::new(vec![CriterionDirection::Maximize]);
        assert!(directions.validate(1).is_ok());
        assert!(matches!(
            directions.validate(2),
            Err(AnalysisError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn zero_range_bounds_are_rejected() {
        let result = Bounds::from_pairs(&[(0.0, 1.0), (5.0, 5.0)]);
        assert_eq!(
            result,
            Err(AnalysisError::ZeroBoundRange {
                criterion: 1,
                value: 5.0
            })
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let result = Bounds::from_pairs(&[(10.0, 1.0)]);
        assert!(matches!(result, Err(AnalysisError::InvertedBounds { criterion: 0, .. })));
    }

    #[test]
    fn infinite_bounds_are_rejected() {
        let result = Bounds::from_pairs(&[(0.0, f64::INFINITY)]);
        assert_eq!(result, Err(AnalysisError::NonFiniteBound { criterion: 0 }));
    }

    #[test]
    fn bounds_wider_than_f64_range_are_rejected() {
        let result = Bounds::from_pairs(&[(0.0, 3.0), (-1.75e308, 1.75e308)]);
        assert_eq!(result, Err(AnalysisError::RangeOverflow { criterion: 1 }));
    }

    #[test]
    fn preferred_edge_follows_direction() {
        let b = CriterionBounds::new(18.0, 40.0);
        assert_eq!(b.preferred_edge(CriterionDirection::Maximize), 40.0);
        assert_eq!(b.preferred_edge(CriterionDirection::Minimize), 18.0);
        assert_eq!(b.range(), 22.0);
    }

    #[test]
    fn bounds_contain_edges() {
        let b = CriterionBounds::new(0.1, 0.6);
        assert!(b.contains(0.1));
        assert!(b.contains(0.6));
        assert!(!b.contains(0.61));
    }

    #[test]
    fn bounds_deserialize_with_validation() {
        let json = r#"[{"min": 0.0, "max": 1.0}, {"min": 2.0, "max": 2.0}]"#;
        assert!(serde_json::from_str::<Bounds>(json).is_err());

        let json = r#"[{"min": 0.0, "max": 1.0}]"#;
        let bounds: Bounds = serde_json::from_str(json).unwrap();
        assert_eq!(bounds.len(), 1);
    }
}
