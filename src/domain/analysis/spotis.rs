//! SPOTIS Scorer - bounded distance to a fixed ideal solution point.

use super::{
    AnalysisError, AnalysisWarning, Bounds, CriteriaDirections, DecisionMatrix, Orientation,
    ScoreVector, WeightVector,
};

/// Stable Preference Ordering Towards Ideal Solution.
///
/// The reference frame comes from externally supplied bounds rather than
/// the observed matrix, so adding or removing alternatives never moves the
/// ideal point.
pub struct SpotisScorer;

impl SpotisScorer {
    pub const ORIENTATION: Orientation = Orientation::LowerIsBetter;

    /// Scores raw measurements against the bounds.
    ///
    /// # Algorithm
    /// 1. Ideal point p_j = max bound for maximized criteria, min bound for
    ///    minimized ones
    /// 2. d_ij = |v_ij - p_j| / (max_j - min_j)
    /// 3. score_i = Σ_j w_j * d_ij
    ///
    /// # Edge Cases
    /// - Values outside the bounds: still scored, d_ij may exceed 1
    /// - A distance or sum beyond f64 range: `DistanceOverflow`
    pub fn score(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        directions: &CriteriaDirections,
        bounds: &Bounds,
    ) -> Result<ScoreVector, AnalysisError> {
        let n = matrix.criterion_count();
        weights.validate(n, None)?;
        directions.validate(n)?;
        bounds.validate(n)?;

        let ideal = Self::ideal_point(directions, bounds);

        let mut scores = Vec::with_capacity(matrix.alternative_count());
        for (i, row) in matrix.rows().iter().enumerate() {
            let mut total = 0.0;
            let terms = row.iter().zip(&ideal).zip(bounds.values()).zip(weights.values());
            for (j, (((v, p), b), w)) in terms.enumerate() {
                total += w * (v - p).abs() / b.range();
                if !total.is_finite() {
                    return Err(AnalysisError::DistanceOverflow {
                        alternative: i,
                        criterion: j,
                    });
                }
            }
            scores.push(total);
        }

        Ok(ScoreVector::new(scores, Self::ORIENTATION))
    }

    /// Returns the ideal solution point, one preferred bound edge per criterion.
    pub fn ideal_point(directions: &CriteriaDirections, bounds: &Bounds) -> Vec<f64> {
        directions
            .values()
            .iter()
            .zip(bounds.values())
            .map(|(d, b)| b.preferred_edge(*d))
            .collect()
    }

    /// Lists every matrix value lying outside its criterion's bounds.
    pub fn out_of_bounds(matrix: &DecisionMatrix, bounds: &Bounds) -> Vec<AnalysisWarning> {
        let mut found = Vec::new();

        for (i, row) in matrix.rows().iter().enumerate() {
            for (j, (&value, b)) in row.iter().zip(bounds.values()).enumerate() {
                if !b.contains(value) {
                    found.push(AnalysisWarning::OutOfBoundsValue {
                        alternative: i,
                        criterion: j,
                        value,
                        min: b.min,
                        max: b.max,
                    });
                }
            }
        }

        found
    }
}
