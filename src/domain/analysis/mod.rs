//! Analysis Module - Pure domain services for multi-criteria ranking.
//!
//! This module contains stateless functions that rank decision alternatives
//! against weighted, possibly conflicting criteria.
//!
//! # Components
//!
//! - `DecisionMatrix` / `NormalizedMatrix` - Raw and min-max normalized measurements
//! - `Normalizer` - Min-max normalization with direction handling
//! - `TopsisScorer` - Closeness to the observed ideal and anti-ideal points
//! - `SpotisScorer` - Bounded distance to a fixed ideal point
//! - `Ranker` - Score vector to rank positions under a tie policy
//! - `McdaPipeline` - Validation, both scorers, both rankings, one report
//!
//! # Design Philosophy
//!
//! Scorers, the normalizer, and the ranker are stateless and take value
//! types as input, returning newly computed values. The pipeline only adds
//! tracing output. No ports or adapters are needed since there's no I/O.

mod criteria;
mod decision_matrix;
mod diagnostics;
mod errors;
mod normalizer;
mod pipeline;
mod ranker;
mod report;
mod scenario;
mod scorer;
mod spotis;
mod topsis;

// Re-export all public types
pub use criteria::{
    Bounds, CriteriaDirections, CriterionBounds, WeightVector, DEFAULT_WEIGHT_TOLERANCE,
};
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder, NormalizedMatrix};
pub use diagnostics::AnalysisWarning;
pub use errors::AnalysisError;
pub use normalizer::Normalizer;
pub use pipeline::{analyze, AnalysisOptions, McdaPipeline};
pub use ranker::{Orientation, RankVector, Ranker, ScoreVector, TiePolicy};
pub use report::{AlternativeResult, McdaReport};
pub use scenario::{CriterionSpec, Scenario};
pub use scorer::{AnalysisInput, McdaMethod, Scorer};
pub use spotis::SpotisScorer;
pub use topsis::TopsisScorer;
