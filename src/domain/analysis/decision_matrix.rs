//! Decision Matrix - alternatives x criteria measurements.

use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Raw criterion measurements, one row per alternative.
///
/// Invariants: at least one row and one column, every row has the same
/// length, every value is finite. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    criteria: usize,
}

impl DecisionMatrix {
    /// Creates a matrix from rows, validating shape and finiteness.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        let criteria = check_rows(&rows)?;

        for (i, row) in rows.iter().enumerate() {
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(AnalysisError::NonFiniteValue {
                    alternative: i,
                    criterion: j,
                });
            }
        }

        Ok(Self { rows, criteria })
    }

    /// Creates a builder for constructing a matrix row by row.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criteria
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, alternative: usize) -> Option<&[f64]> {
        self.rows.get(alternative).map(|r| r.as_slice())
    }

    pub fn value(&self, alternative: usize, criterion: usize) -> Option<f64> {
        self.rows.get(alternative)?.get(criterion).copied()
    }

    /// Returns a copy of one column.
    pub fn column(&self, criterion: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.get(criterion).copied()).collect()
    }

    /// Returns (min, max) of one column.
    pub fn column_range(&self, criterion: usize) -> (f64, f64) {
        self.rows
            .iter()
            .filter_map(|r| r.get(criterion).copied())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}

impl TryFrom<Vec<Vec<f64>>> for DecisionMatrix {
    type Error = AnalysisError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<DecisionMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DecisionMatrix) -> Self {
        matrix.rows
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one alternative's measurements.
    pub fn row(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.rows.push(values.into());
        self
    }

    /// Builds and validates the matrix.
    pub fn build(self) -> Result<DecisionMatrix, AnalysisError> {
        DecisionMatrix::new(self.rows)
    }
}

/// Min-max normalized matrix: same shape as its source, every entry in
/// [0, 1], and 1 always marks the most preferred value of a criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedMatrix {
    rows: Vec<Vec<f64>>,
    criteria: usize,
}

impl NormalizedMatrix {
    /// Wraps rows that are already normalized, validating shape and range.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AnalysisError> {
        let criteria = check_rows(&rows)?;

        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !(0.0..=1.0).contains(&value) {
                    return Err(AnalysisError::NotNormalized {
                        alternative: i,
                        criterion: j,
                        value,
                    });
                }
            }
        }

        Ok(Self { rows, criteria })
    }

    /// Wraps rows produced by the normalizer without re-checking them.
    pub(crate) fn from_normalizer(rows: Vec<Vec<f64>>, criteria: usize) -> Self {
        Self { rows, criteria }
    }

    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn value(&self, alternative: usize, criterion: usize) -> Option<f64> {
        self.rows.get(alternative)?.get(criterion).copied()
    }

    pub fn column(&self, criterion: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.get(criterion).copied()).collect()
    }

    /// Reinterprets the normalized values as raw measurements.
    pub fn to_decision_matrix(&self) -> DecisionMatrix {
        DecisionMatrix {
            rows: self.rows.clone(),
            criteria: self.criteria,
        }
    }
}

/// Checks non-emptiness and rectangularity, returning the column count.
fn check_rows(rows: &[Vec<f64>]) -> Result<usize, AnalysisError> {
    let criteria = match rows.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(AnalysisError::EmptyMatrix),
    };

    for (i, row) in rows.iter().enumerate() {
        if row.len() != criteria {
            return Err(AnalysisError::shape_mismatch(
                format!("row {}", i),
                criteria,
                row.len(),
            ));
        }
    }

    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_creates_matrix() {
        let matrix = DecisionMatrix::builder()
            .row(vec![1.0, 2.0, 3.0])
            .row(vec![4.0, 5.0, 6.0])
            .build()
            .unwrap();

        assert_eq!(matrix.alternative_count(), 2);
        assert_eq!(matrix.criterion_count(), 3);
        assert_eq!(matrix.value(1, 2), Some(6.0));
        assert_eq!(matrix.column(1), vec![2.0, 5.0]);
        assert_eq!(matrix.row(0), Some(&[1.0, 2.0, 3.0][..]));
    }

    #[test]
    fn empty_matrix_is_rejected() {
        assert_eq!(DecisionMatrix::new(vec![]), Err(AnalysisError::EmptyMatrix));
        assert_eq!(
            DecisionMatrix::new(vec![vec![], vec![]]),
            Err(AnalysisError::EmptyMatrix)
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = DecisionMatrix::new(vec![vec![1.0, 2.0], vec![3.0]]);
        match result {
            Err(AnalysisError::ShapeMismatch {
                what,
                expected,
                actual,
            }) => {
                assert_eq!(what, "row 1");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let result = DecisionMatrix::new(vec![vec![1.0, 2.0], vec![f64::NAN, 3.0]]);
        assert_eq!(
            result,
            Err(AnalysisError::NonFiniteValue {
                alternative: 1,
                criterion: 0
            })
        );

        let result = DecisionMatrix::new(vec![vec![1.0, f64::INFINITY]]);
        assert!(matches!(result, Err(AnalysisError::NonFiniteValue { .. })));
    }

    #[test]
    fn column_range_spans_min_and_max() {
        let matrix = DecisionMatrix::new(vec![vec![3.0], vec![-1.0], vec![7.5]]).unwrap();
        assert_eq!(matrix.column_range(0), (-1.0, 7.5));
    }

    #[test]
    fn out_of_range_lookups_return_none() {
        let matrix = DecisionMatrix::new(vec![vec![1.0]]).unwrap();
        assert!(matrix.value(1, 0).is_none());
        assert!(matrix.value(0, 1).is_none());
        assert!(matrix.row(3).is_none());
    }

    #[test]
    fn matrix_deserializes_with_validation() {
        let matrix: DecisionMatrix = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(matrix.alternative_count(), 2);

        let ragged = serde_json::from_str::<DecisionMatrix>("[[1.0, 2.0], [3.0]]");
        assert!(ragged.is_err());
    }

    #[test]
    fn matrix_serializes_as_nested_arrays() {
        let matrix = DecisionMatrix::new(vec![vec![1.0, 2.5]]).unwrap();
        assert_eq!(serde_json::to_string(&matrix).unwrap(), "[[1.0,2.5]]");
    }

    #[test]
    fn normalized_matrix_rejects_values_outside_unit_interval() {
        let result = NormalizedMatrix::from_rows(vec![vec![0.5, 1.2]]);
        assert_eq!(
            result,
            Err(AnalysisError::NotNormalized {
                alternative: 0,
                criterion: 1,
                value: 1.2
            })
        );
    }

    #[test]
    fn normalized_matrix_converts_back_to_decision_matrix() {
        let normalized = NormalizedMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.25]]).unwrap();
        let matrix = normalized.to_decision_matrix();
        assert_eq!(matrix.rows(), normalized.rows());
        assert_eq!(matrix.criterion_count(), 2);
    }
}
