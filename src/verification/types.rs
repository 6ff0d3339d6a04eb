use serde::Serialize;

use crate::quality::QualityError;
use crate::reference::ReferenceError;

/// Running sums over the sample, each term pre-divided by the sample size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct VerificationAccumulator {
    /// Mean word-set similarity.
    pub authenticity_sum: f64,
    /// Mean of `question_rating * answer_rating`.
    pub quality_sum: f64,
    pub avg_question_rating: f64,
    pub avg_answer_rating: f64,
}

impl VerificationAccumulator {
    /// Adds one verified record's contribution for a sample of `sample_len` records.
    pub fn add(
        &mut self,
        similarity: f64,
        question_rating: f64,
        answer_rating: f64,
        sample_len: usize,
    ) {
        let n = sample_len as f64;
        self.authenticity_sum += similarity / n;
        self.quality_sum += (question_rating * answer_rating) / n;
        self.avg_question_rating += question_rating / n;
        self.avg_answer_rating += answer_rating / n;
    }
}

#[derive(Debug)]
/// Why a verification pass was abandoned.
pub enum AbortReason {
    /// Reference document could not be fetched.
    Fetch {
        title: String,
        source: ReferenceError,
    },
    /// Submitted context diverges too far from the reference.
    LowAuthenticity {
        title: String,
        similarity: f64,
        threshold: f64,
    },
    /// Question or answer rating failed.
    Evaluation {
        title: String,
        source: QualityError,
    },
    /// The final topic-diversity rating failed.
    Uniqueness { source: QualityError },
}

impl AbortReason {
    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            AbortReason::Fetch { .. } => "FETCH_FAILED",
            AbortReason::LowAuthenticity { .. } => "LOW_AUTHENTICITY",
            AbortReason::Evaluation { .. } => "EVALUATION_FAILED",
            AbortReason::Uniqueness { .. } => "UNIQUENESS_FAILED",
        }
    }
}

impl std::fmt::Display for AbortReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbortReason::Fetch { title, source } => {
                write!(f, "reference fetch for '{}' failed: {}", title, source)
            }
            AbortReason::LowAuthenticity {
                title,
                similarity,
                threshold,
            } => write!(
                f,
                "context for '{}' has similarity {:.4} below {:.2}",
                title, similarity, threshold
            ),
            AbortReason::Evaluation { title, source } => {
                write!(f, "rating for '{}' failed: {}", title, source)
            }
            AbortReason::Uniqueness { source } => write!(f, "uniqueness rating failed: {}", source),
        }
    }
}

#[derive(Debug)]
/// Result of one verification pass over a sample.
pub enum VerificationOutcome {
    /// Every sampled record passed.
    Verified {
        totals: VerificationAccumulator,
        uniqueness: f64,
    },
    /// The pass stopped early; no partial credit is kept.
    Aborted { reason: AbortReason },
}

impl VerificationOutcome {
    /// Returns `true` if verified.
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified { .. })
    }

    /// Accumulated totals, zeroed for an aborted pass.
    pub fn totals(&self) -> VerificationAccumulator {
        match self {
            VerificationOutcome::Verified { totals, .. } => *totals,
            VerificationOutcome::Aborted { .. } => VerificationAccumulator::default(),
        }
    }

    /// Uniqueness rating, zero for an aborted pass.
    pub fn uniqueness(&self) -> f64 {
        match self {
            VerificationOutcome::Verified { uniqueness, .. } => *uniqueness,
            VerificationOutcome::Aborted { .. } => 0.0,
        }
    }

    pub fn abort_reason(&self) -> Option<&AbortReason> {
        match self {
            VerificationOutcome::Verified { .. } => None,
            VerificationOutcome::Aborted { reason } => Some(reason),
        }
    }
}
