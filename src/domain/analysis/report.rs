//! McdaReport - combined TOPSIS/SPOTIS scores and ranks for one run.

use serde::{Deserialize, Serialize};

use super::{AnalysisError, AnalysisWarning, McdaMethod, RankVector, ScoreVector, TiePolicy};
use crate::domain::foundation::{AnalysisId, Timestamp};

/// Result of one analysis run. All vectors are aligned with the input
/// alternatives; a report is only ever built complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McdaReport {
    pub analysis_id: AnalysisId,
    pub computed_at: Timestamp,
    pub alternative_count: usize,
    pub criterion_count: usize,
    pub tie_policy: TiePolicy,
    pub topsis_scores: ScoreVector,
    pub spotis_scores: ScoreVector,
    pub topsis_ranks: RankVector,
    pub spotis_ranks: RankVector,
    pub warnings: Vec<AnalysisWarning>,
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeResult {
    pub label: String,
    pub topsis_score: f64,
    pub spotis_score: f64,
    pub topsis_rank: usize,
    pub spotis_rank: usize,
}

impl McdaReport {
    /// Builds the results table keyed by alternative label, in input order.
    pub fn rows<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<AlternativeResult>, AnalysisError> {
        if labels.len() != self.alternative_count {
            return Err(AnalysisError::shape_mismatch(
                "alternative labels",
                self.alternative_count,
                labels.len(),
            ));
        }

        Ok(labels
            .iter()
            .enumerate()
            .map(|(i, label)| AlternativeResult {
                label: label.as_ref().to_string(),
                topsis_score: self.topsis_scores.values()[i],
                spotis_score: self.spotis_scores.values()[i],
                topsis_rank: self.topsis_ranks.values()[i],
                spotis_rank: self.spotis_ranks.values()[i],
            })
            .collect())
    }

    pub fn scores_for(&self, method: McdaMethod) -> &ScoreVector {
        match method {
            McdaMethod::Topsis => &self.topsis_scores,
            McdaMethod::Spotis => &self.spotis_scores,
        }
    }

    pub fn ranks_for(&self, method: McdaMethod) -> &RankVector {
        match method {
            McdaMethod::Topsis => &self.topsis_ranks,
            McdaMethod::Spotis => &self.spotis_ranks,
        }
    }

    /// Index of the alternative ranked first by TOPSIS.
    pub fn best_topsis(&self) -> Option<usize> {
        self.topsis_ranks.best()
    }

    /// Index of the alternative ranked first by SPOTIS.
    pub fn best_spotis(&self) -> Option<usize> {
        self.spotis_ranks.best()
    }

    /// Returns true if both methods put the same alternative first.
    pub fn methods_agree_on_best(&self) -> bool {
        self.best_topsis().is_some() && self.best_topsis() == self.best_spotis()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
