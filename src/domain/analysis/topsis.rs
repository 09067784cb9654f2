//! TOPSIS Scorer - closeness to the ideal and anti-ideal solutions.

use super::{
    AnalysisError, CriteriaDirections, DecisionMatrix, NormalizedMatrix, Normalizer, Orientation,
    ScoreVector, WeightVector,
};

/// Technique for Order of Preference by Similarity to Ideal Solution.
pub struct TopsisScorer;

impl TopsisScorer {
    pub const ORIENTATION: Orientation = Orientation::HigherIsBetter;

    /// Scores raw measurements: min-max normalization followed by
    /// [`TopsisScorer::score_normalized`].
    pub fn score(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        directions: &CriteriaDirections,
    ) -> Result<ScoreVector, AnalysisError> {
        let normalized = Normalizer::normalize(matrix, directions)?;
        Self::score_normalized(&normalized, weights)
    }

    /// Scores a matrix that is already normalized with 1 as the preferred
    /// value of every criterion.
    ///
    /// # Algorithm
    /// 1. Weight each column: w_ij = w_j * r_ij
    /// 2. Ideal point = column maxima, anti-ideal = column minima
    /// 3. d+ / d- = Euclidean distance to ideal / anti-ideal
    /// 4. score = d- / (d+ + d-)
    ///
    /// # Edge Cases
    /// - d+ + d- == 0 (alternative is both ideal and anti-ideal, e.g. all
    ///   columns constant): score is 0
    pub fn score_normalized(
        normalized: &NormalizedMatrix,
        weights: &WeightVector,
    ) -> Result<ScoreVector, AnalysisError> {
        let n = normalized.criterion_count();
        weights.validate(n, None)?;

        let weighted: Vec<Vec<f64>> = normalized
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights.values())
                    .map(|(r, w)| r * w)
                    .collect()
            })
            .collect();

        let mut ideal = vec![f64::NEG_INFINITY; n];
        let mut anti_ideal = vec![f64::INFINITY; n];
        for row in &weighted {
            for (j, &v) in row.iter().enumerate() {
                ideal[j] = ideal[j].max(v);
                anti_ideal[j] = anti_ideal[j].min(v);
            }
        }

        let scores: Vec<f64> = weighted
            .iter()
            .map(|row| {
                let d_pos = euclidean(row, &ideal);
                let d_neg = euclidean(row, &anti_ideal);
                let total = d_pos + d_neg;
                if total == 0.0 {
                    0.0
                } else {
                    d_neg / total
                }
            })
            .collect();

        Ok(ScoreVector::new(scores, Self::ORIENTATION))
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
