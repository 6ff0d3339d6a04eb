use crate::constants::{QUALITY_WEIGHT, SCORE_SIZE_SCALE, UNIQUENESS_WEIGHT, VALIDITY_THRESHOLD};

/// Final score of a verified contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateScore {
    /// Weighted quality/uniqueness composite, gated by authenticity.
    pub total_score: f64,
    /// `total_score` scaled by dataset size and capped at `1.0`.
    pub score: f64,
    pub valid: bool,
}

/// Combines authenticity, quality and uniqueness into a bounded score.
///
/// `total = (wq * quality + wu * uniqueness) * authenticity`, then
/// `score = min(total * dataset_size / size_scale, 1.0)` and the contribution
/// is valid when `score > validity_threshold`. Authenticity multiplies the
/// whole composite, so zero authenticity zeroes the score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreAggregator {
    pub quality_weight: f64,
    pub uniqueness_weight: f64,
    pub size_scale: f64,
    pub validity_threshold: f64,
}

impl Default for ScoreAggregator {
    fn default() -> Self {
        Self {
            quality_weight: QUALITY_WEIGHT,
            uniqueness_weight: UNIQUENESS_WEIGHT,
            size_scale: SCORE_SIZE_SCALE,
            validity_threshold: VALIDITY_THRESHOLD,
        }
    }
}

impl ScoreAggregator {
    pub fn aggregate(
        &self,
        authenticity_sum: f64,
        quality_sum: f64,
        uniqueness: f64,
        dataset_size: usize,
    ) -> AggregateScore {
        let total_score = (self.quality_weight * quality_sum
            + self.uniqueness_weight * uniqueness)
            * authenticity_sum;
        let score = (total_score * dataset_size as f64 / self.size_scale).min(1.0);

        AggregateScore {
            total_score,
            score,
            valid: score > self.validity_threshold,
        }
    }
}
