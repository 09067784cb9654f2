//! Analysis errors - fatal conditions that abort a ranking run.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Fatal input conditions for normalization, scoring, and ranking.
///
/// Non-fatal conditions (constant criteria, values outside SPOTIS bounds)
/// are reported as [`super::AnalysisWarning`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Decision matrix must contain at least one alternative and one criterion")]
    EmptyMatrix,

    #[error("Shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("Non-finite value at alternative {alternative}, criterion {criterion}")]
    NonFiniteValue { alternative: usize, criterion: usize },

    #[error("Value {value} at alternative {alternative}, criterion {criterion} is not normalized to [0, 1]")]
    NotNormalized {
        alternative: usize,
        criterion: usize,
        value: f64,
    },

    #[error("Invalid weights: {reason}")]
    InvalidWeights { reason: String },

    #[error("Bounds of criterion {criterion} have zero range (min = max = {value})")]
    ZeroBoundRange { criterion: usize, value: f64 },

    #[error("Bounds of criterion {criterion} are inverted: min {min} > max {max}")]
    InvertedBounds { criterion: usize, min: f64, max: f64 },

    #[error("Bounds of criterion {criterion} are not finite")]
    NonFiniteBound { criterion: usize },

    #[error(
        "Value {value} of alternative {alternative} lies outside bounds [{min}, {max}] of criterion {criterion}"
    )]
    OutOfBoundsValue {
        alternative: usize,
        criterion: usize,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Criterion '{criterion}' has no bounds")]
    MissingBounds { criterion: String },

    #[error("Value range of criterion {criterion} exceeds the representable f64 range")]
    RangeOverflow { criterion: usize },

    #[error("Distance of alternative {alternative} on criterion {criterion} exceeds the representable f64 range")]
    DistanceOverflow { alternative: usize, criterion: usize },
}

impl AnalysisError {
    /// Creates a shape mismatch error.
    pub fn shape_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        AnalysisError::ShapeMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid weights error.
    pub fn invalid_weights(reason: impl Into<String>) -> Self {
        AnalysisError::InvalidWeights {
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::EmptyMatrix => ErrorCode::EmptyMatrix,
            AnalysisError::ShapeMismatch { .. } => ErrorCode::ShapeMismatch,
            AnalysisError::NonFiniteValue { .. } | AnalysisError::NonFiniteBound { .. } => {
                ErrorCode::NonFiniteValue
            }
            AnalysisError::NotNormalized { .. } => ErrorCode::OutOfRange,
            AnalysisError::InvalidWeights { .. } => ErrorCode::InvalidWeights,
            AnalysisError::ZeroBoundRange { .. } => ErrorCode::ZeroBoundRange,
            AnalysisError::InvertedBounds { .. } => ErrorCode::InvertedBounds,
            AnalysisError::OutOfBoundsValue { .. } => ErrorCode::OutOfBoundsValue,
            AnalysisError::MissingBounds { .. } => ErrorCode::MissingBounds,
            AnalysisError::RangeOverflow { .. } | AnalysisError::DistanceOverflow { .. } => {
                ErrorCode::RangeOverflow
            }
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let domain_err = DomainError::new(err.code(), err.to_string());
        match &err {
            AnalysisError::ShapeMismatch {
                what,
                expected,
                actual,
            } => domain_err
                .with_detail("what", what.clone())
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            AnalysisError::ZeroBoundRange { criterion, .. }
            | AnalysisError::InvertedBounds { criterion, .. }
            | AnalysisError::NonFiniteBound { criterion }
            | AnalysisError::RangeOverflow { criterion } => {
                domain_err.with_detail("criterion", criterion.to_string())
            }
            AnalysisError::NonFiniteValue {
                alternative,
                criterion,
            }
            | AnalysisError::NotNormalized {
                alternative,
                criterion,
                ..
            }
            | AnalysisError::OutOfBoundsValue {
                alternative,
                criterion,
                ..
            }
            | AnalysisError::DistanceOverflow {
                alternative,
                criterion,
            } => domain_err
                .with_detail("alternative", alternative.to_string())
                .with_detail("criterion", criterion.to_string()),
            AnalysisError::MissingBounds { criterion } => {
                domain_err.with_detail("criterion", criterion.clone())
            }
            AnalysisError::EmptyMatrix | AnalysisError::InvalidWeights { .. } => domain_err,
        }
    }
}
