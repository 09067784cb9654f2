//! Ranker - converts oriented score vectors into rank positions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which end of a score vector is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    HigherIsBetter,
    LowerIsBetter,
}

/// How equal scores are ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    /// Standard competition ranking ("1224"): equal scores share the best
    /// rank of their group and the next rank skips accordingly.
    #[default]
    Competition,
    /// Ordinal ranking ("1234"): equal scores keep their input order.
    Ordinal,
}

/// One score per alternative, with its orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    values: Vec<f64>,
    orientation: Orientation,
}

impl ScoreVector {
    pub fn new(values: Vec<f64>, orientation: Orientation) -> Self {
        Self { values, orientation }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, alternative: usize) -> Option<f64> {
        self.values.get(alternative).copied()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Compares two scores so that the preferred one sorts first.
    fn preference(&self, a: f64, b: f64) -> Ordering {
        match self.orientation {
            Orientation::HigherIsBetter => b.total_cmp(&a),
            Orientation::LowerIsBetter => a.total_cmp(&b),
        }
    }
}

/// Rank positions (1 = best), aligned with the alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankVector(Vec<usize>);

impl RankVector {
    pub fn values(&self) -> &[usize] {
        &self.0
    }

    pub fn get(&self, alternative: usize) -> Option<usize> {
        self.0.get(alternative).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the first alternative holding rank 1.
    pub fn best(&self) -> Option<usize> {
        self.0.iter().position(|&r| r == 1)
    }

    /// Alternative indices ordered from best to worst rank, input order on ties.
    pub fn order(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.0.len()).collect();
        indices.sort_by_key(|&i| self.0[i]);
        indices
    }
}

/// Rank derivation.
pub struct Ranker;

impl Ranker {
    /// Ranks the scores according to their orientation.
    ///
    /// # Algorithm
    /// Stable-sort alternatives from most to least preferred, then walk the
    /// sorted order assigning positions. Scores are equal only when `==`
    /// holds exactly; no epsilon is applied.
    ///
    /// # Edge Cases
    /// - Empty scores: Returns empty ranks
    /// - All equal under Competition: every alternative gets rank 1
    pub fn rank(scores: &ScoreVector, policy: TiePolicy) -> RankVector {
        let n = scores.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| scores.preference(scores.values[a], scores.values[b]));

        let mut ranks = vec![0; n];
        for (position, &alt) in order.iter().enumerate() {
            let rank = match policy {
                TiePolicy::Ordinal => position + 1,
                TiePolicy::Competition => {
                    let prev = position.checked_sub(1).map(|p| order[p]);
                    match prev {
                        Some(p) if scores.values[p] == scores.values[alt] => ranks[p],
                        _ => position + 1,
                    }
                }
            };
            ranks[alt] = rank;
        }

        RankVector(ranks)
    }

    /// Convenience for ranking a bare slice.
    pub fn rank_values(values: &[f64], orientation: Orientation, policy: TiePolicy) -> RankVector {
        Self::rank(&ScoreVector::new(values.to_vec(), orientation), policy)
    }
}
