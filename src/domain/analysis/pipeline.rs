//! Pipeline Orchestrator - one full TOPSIS + SPOTIS ranking run.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{
    AnalysisError, AnalysisInput, AnalysisWarning, Bounds, CriteriaDirections, DecisionMatrix,
    McdaMethod, McdaReport, Normalizer, Ranker, SpotisScorer, TiePolicy, WeightVector,
    DEFAULT_WEIGHT_TOLERANCE,
};
use crate::domain::foundation::{AnalysisId, Timestamp};

/// Policies applied while validating and ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Allowed deviation of the weight sum from 1.
    pub weight_tolerance: f64,
    /// Reject weights whose sum is outside the tolerance.
    pub enforce_weight_sum: bool,
    pub tie_policy: TiePolicy,
    /// Turn out-of-bounds SPOTIS values into a fatal error.
    pub reject_out_of_bounds: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
            enforce_weight_sum: true,
            tie_policy: TiePolicy::Competition,
            reject_out_of_bounds: false,
        }
    }
}

impl AnalysisOptions {
    fn weight_sum_tolerance(&self) -> Option<f64> {
        self.enforce_weight_sum.then_some(self.weight_tolerance)
    }
}

/// Stateless orchestrator; holds only its options, so one instance can
/// serve any number of independent runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct McdaPipeline {
    options: AnalysisOptions,
}

impl McdaPipeline {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Validates the input, scores it with both methods, ranks both score
    /// vectors, and returns the combined report.
    ///
    /// Fails as a whole on any fatal condition; non-fatal conditions are
    /// collected in `McdaReport::warnings`.
    pub fn analyze(&self, input: &AnalysisInput) -> Result<McdaReport, AnalysisError> {
        input.validate(self.options.weight_sum_tolerance())?;

        let warnings = self.collect_warnings(input)?;

        let topsis_scores = McdaMethod::Topsis.scorer().evaluate(input)?;
        let spotis_scores = McdaMethod::Spotis.scorer().evaluate(input)?;

        let topsis_ranks = Ranker::rank(&topsis_scores, self.options.tie_policy);
        let spotis_ranks = Ranker::rank(&spotis_scores, self.options.tie_policy);

        let report = McdaReport {
            analysis_id: AnalysisId::new(),
            computed_at: Timestamp::now(),
            alternative_count: input.matrix.alternative_count(),
            criterion_count: input.matrix.criterion_count(),
            tie_policy: self.options.tie_policy,
            topsis_scores,
            spotis_scores,
            topsis_ranks,
            spotis_ranks,
            warnings,
        };

        debug!(
            analysis_id = %report.analysis_id,
            alternatives = report.alternative_count,
            criteria = report.criterion_count,
            warnings = report.warnings.len(),
            "Computed TOPSIS and SPOTIS rankings"
        );

        Ok(report)
    }

    fn collect_warnings(&self, input: &AnalysisInput) -> Result<Vec<AnalysisWarning>, AnalysisError> {
        let mut warnings: Vec<AnalysisWarning> = Normalizer::degenerate_criteria(&input.matrix)
            .into_iter()
            .map(|criterion| AnalysisWarning::DegenerateCriterion {
                criterion,
                value: input.matrix.value(0, criterion).unwrap_or_default(),
            })
            .collect();

        let out_of_bounds = SpotisScorer::out_of_bounds(&input.matrix, &input.bounds);
        if self.options.reject_out_of_bounds {
            if let Some(AnalysisWarning::OutOfBoundsValue {
                alternative,
                criterion,
                value,
                min,
                max,
            }) = out_of_bounds.first().cloned()
            {
                return Err(AnalysisError::OutOfBoundsValue {
                    alternative,
                    criterion,
                    value,
                    min,
                    max,
                });
            }
        }
        warnings.extend(out_of_bounds);

        for warning in &warnings {
            warn!(criterion = warning.criterion(), "{}", warning);
        }

        Ok(warnings)
    }
}

/// Runs one analysis with default options.
pub fn analyze(
    matrix: DecisionMatrix,
    weights: WeightVector,
    directions: CriteriaDirections,
    bounds: Bounds,
) -> Result<McdaReport, AnalysisError> {
    McdaPipeline::default().analyze(&AnalysisInput::new(matrix, weights, directions, bounds))
}
