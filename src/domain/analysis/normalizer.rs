//! Normalizer - min-max rescaling of criterion columns onto [0, 1].

use super::{AnalysisError, CriteriaDirections, DecisionMatrix, NormalizedMatrix};
use crate::domain::foundation::CriterionDirection;

/// Min-max normalization functions.
pub struct Normalizer;

impl Normalizer {
    /// Rescales every column onto [0, 1] with 1 marking the preferred value.
    ///
    /// # Algorithm
    /// For column j with observed range [min_j, max_j]:
    /// - Maximize: (v - min_j) / (max_j - min_j)
    /// - Minimize: (max_j - v) / (max_j - min_j)
    ///
    /// # Edge Cases
    /// - Constant column (max_j == min_j): every value becomes 0, so the
    ///   criterion cannot favor any alternative
    /// - Single alternative: every column is constant, result is all zeros
    /// - Column spread beyond f64 range (e.g. [1.7e308, -1.7e308]):
    ///   `RangeOverflow`
    pub fn normalize(
        matrix: &DecisionMatrix,
        directions: &CriteriaDirections,
    ) -> Result<NormalizedMatrix, AnalysisError> {
        let n = matrix.criterion_count();
        directions.validate(n)?;

        let mut rows = vec![vec![0.0; n]; matrix.alternative_count()];

        for (j, direction) in directions.values().iter().enumerate() {
            let (lo, hi) = matrix.column_range(j);
            let range = hi - lo;
            if !range.is_finite() {
                return Err(AnalysisError::RangeOverflow { criterion: j });
            }
            if range == 0.0 {
                continue;
            }

            for (i, row) in matrix.rows().iter().enumerate() {
                let v = row[j];
                rows[i][j] = match direction {
                    CriterionDirection::Maximize => (v - lo) / range,
                    CriterionDirection::Minimize => (hi - v) / range,
                };
            }
        }

        Ok(NormalizedMatrix::from_normalizer(rows, n))
    }

    /// Returns the indices of constant columns.
    pub fn degenerate_criteria(matrix: &DecisionMatrix) -> Vec<usize> {
        (0..matrix.criterion_count())
            .filter(|&j| {
                let (lo, hi) = matrix.column_range(j);
                hi - lo == 0.0
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dirs(signs: &[i8]) -> CriteriaDirections {
        CriteriaDirections::from_signs(signs).unwrap()
    }

    #[test]
    fn maximize_column_scales_to_unit_interval() {
        let matrix = DecisionMatrix::new(vec![vec![10.0], vec![20.0], vec![15.0]]).unwrap();
        let normalized = Normalizer::normalize(&matrix, &dirs(&[1])).unwrap();
        assert_eq!(normalized.column(0), vec![0.0, 1.0, 0.5]);
    }

    #[test]
    fn minimize_column_inverts() {
        let matrix = DecisionMatrix::new(vec![vec![10.0], vec![20.0], vec![15.0]]).unwrap();
        let normalized = Normalizer::normalize(&matrix, &dirs(&[-1])).unwrap();
        assert_eq!(normalized.column(0), vec![1.0, 0.0, 0.5]);
    }

    #[test]
    fn constant_column_becomes_zero() {
        let matrix = DecisionMatrix::new(vec![vec![5.0, 1.0], vec![5.0, 3.0]]).unwrap();
        let normalized = Normalizer::normalize(&matrix, &dirs(&[1, 1])).unwrap();
        assert_eq!(normalized.column(0), vec![0.0, 0.0]);
        assert_eq!(normalized.column(1), vec![0.0, 1.0]);
        assert_eq!(Normalizer::degenerate_criteria(&matrix), vec![0]);
    }

    #[test]
    fn single_alternative_normalizes_to_zeros() {
        let matrix = DecisionMatrix::new(vec![vec![3.0, 7.0, 1.0]]).unwrap();
        let normalized = Normalizer::normalize(&matrix, &dirs(&[1, -1, 1])).unwrap();
        assert_eq!(normalized.rows(), &[vec![0.0, 0.0, 0.0]]);
        assert_eq!(Normalizer::degenerate_criteria(&matrix), vec![0, 1, 2]);
    }

    #[test]
    fn direction_length_mismatch_is_rejected() {
        let matrix = DecisionMatrix::new(vec![vec![1.0, 2.0]]).unwrap();
        let result = Normalizer::normalize(&matrix, &dirs(&[1]));
        assert_eq!(result, Err(AnalysisError::shape_mismatch("directions", 2, 1)));
    }

    #[test]
    fn column_spread_beyond_f64_range_is_rejected() {
        let matrix = DecisionMatrix::new(vec![vec![1.7e308, 1.0], vec![-1.7e308, 2.0]]).unwrap();
        let result = Normalizer::normalize(&matrix, &dirs(&[1, 1]));
        assert_eq!(result, Err(AnalysisError::RangeOverflow { criterion: 0 }));
    }

    #[test]
    fn wide_but_finite_spread_still_normalizes() {
        let matrix = DecisionMatrix::new(vec![vec![8.0e307], vec![-8.0e307]]).unwrap();
        let normalized = Normalizer::normalize(&matrix, &dirs(&[1])).unwrap();
        assert_eq!(normalized.column(0), vec![1.0, 0.0]);
    }

    #[test]
    fn reference_cost_column_normalizes() {
        let matrix = DecisionMatrix::new(vec![
            vec![100000.0],
            vec![120000.0],
            vec![110000.0],
            vec![95000.0],
            vec![105000.0],
        ])
        .unwrap();
        let normalized = Normalizer::normalize(&matrix, &dirs(&[-1])).unwrap();
        let col = normalized.column(0);
        assert!((col[0] - 0.8).abs() < 1e-12);
        assert_eq!(col[1], 0.0);
        assert_eq!(col[3], 1.0);
    }

    fn matrix_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (1usize..8, 1usize..6).prop_flat_map(|(m, n)| {
            prop::collection::vec(prop::collection::vec(-1.0e4f64..1.0e4, n), m)
        })
    }

    proptest! {
        /// Property: every normalized value lies in [0, 1].
        #[test]
        fn normalized_values_in_unit_interval(rows in matrix_strategy(), flip in any::<bool>()) {
            let matrix = DecisionMatrix::new(rows).unwrap();
            let sign = if flip { -1 } else { 1 };
            let directions = dirs(&vec![sign; matrix.criterion_count()]);
            let normalized = Normalizer::normalize(&matrix, &directions).unwrap();
            for row in normalized.rows() {
                for &v in row {
                    prop_assert!((0.0..=1.0).contains(&v), "value {} outside [0, 1]", v);
                }
            }
        }

        /// Property: re-normalizing all-maximize output returns the same matrix.
        #[test]
        fn normalization_is_idempotent(rows in matrix_strategy()) {
            let matrix = DecisionMatrix::new(rows).unwrap();
            let n = matrix.criterion_count();
            let directions = dirs(&vec![1; n]);
            let once = Normalizer::normalize(&matrix, &directions).unwrap();
            let twice = Normalizer::normalize(&once.to_decision_matrix(), &directions).unwrap();
            for (a, b) in once.rows().iter().zip(twice.rows()) {
                for (x, y) in a.iter().zip(b) {
                    prop_assert!((x - y).abs() < 1e-9, "{} != {}", x, y);
                }
            }
        }

        /// Property: negating a column and flipping its direction leaves the
        /// normalized column unchanged.
        #[test]
        fn direction_flip_with_negation_is_invariant(rows in matrix_strategy()) {
            let matrix = DecisionMatrix::new(rows.clone()).unwrap();
            let negated = DecisionMatrix::new(
                rows.iter().map(|r| r.iter().map(|v| -v).collect()).collect(),
            )
            .unwrap();
            let n = matrix.criterion_count();
            let a = Normalizer::normalize(&matrix, &dirs(&vec![-1; n])).unwrap();
            let b = Normalizer::normalize(&negated, &dirs(&vec![1; n])).unwrap();
            for (ra, rb) in a.rows().iter().zip(b.rows()) {
                for (x, y) in ra.iter().zip(rb) {
                    prop_assert!((x - y).abs() < 1e-12, "{} != {}", x, y);
                }
            }
        }
    }
}
