use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::aggregate::AggregateScore;
use super::error::ProofResult;
use crate::constants::RESULTS_FILENAME;
use crate::verification::VerificationAccumulator;

/// Public reporting metrics attached to a proof.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProofAttributes {
    pub total_score: f64,
    pub number_examples: usize,
    pub number_sampled: usize,
    pub avg_question_rating: f64,
    pub avg_answer_rating: f64,
}

/// Metadata published alongside the proof.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProofMetadata {
    pub dlp_id: u64,
}

/// Outcome of one proof run, as published.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProofResponse {
    pub dlp_id: u64,
    pub valid: bool,
    pub score: f64,
    pub authenticity: f64,
    /// Not computed here; always `0.0`.
    pub ownership: f64,
    pub quality: f64,
    pub uniqueness: f64,
    pub attributes: ProofAttributes,
    pub metadata: ProofMetadata,
}

impl ProofResponse {
    /// Rejected contribution: every score dimension zero, `valid = false`.
    pub fn nil(dlp_id: u64, number_examples: usize, number_sampled: usize) -> Self {
        Self {
            dlp_id,
            valid: false,
            score: 0.0,
            authenticity: 0.0,
            ownership: 0.0,
            quality: 0.0,
            uniqueness: 0.0,
            attributes: ProofAttributes {
                number_examples,
                number_sampled,
                ..Default::default()
            },
            metadata: ProofMetadata { dlp_id },
        }
    }

    /// Response for a fully verified sample.
    pub fn verified(
        dlp_id: u64,
        totals: &VerificationAccumulator,
        uniqueness: f64,
        aggregate: &AggregateScore,
        number_examples: usize,
        number_sampled: usize,
    ) -> Self {
        Self {
            dlp_id,
            valid: aggregate.valid,
            score: aggregate.score,
            authenticity: totals.authenticity_sum,
            ownership: 0.0,
            quality: totals.quality_sum,
            uniqueness,
            attributes: ProofAttributes {
                total_score: aggregate.total_score,
                number_examples,
                number_sampled,
                avg_question_rating: totals.avg_question_rating,
                avg_answer_rating: totals.avg_answer_rating,
            },
            metadata: ProofMetadata { dlp_id },
        }
    }

    pub fn is_nil(&self) -> bool {
        !self.valid && self.score == 0.0 && self.authenticity == 0.0 && self.quality == 0.0
    }

    pub fn to_json_pretty(&self) -> ProofResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the response to `<dir>/results.json`, creating `dir` if needed.
    pub fn write_to_dir(&self, dir: &Path) -> ProofResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(RESULTS_FILENAME);
        fs::write(&path, self.to_json_pretty()?)?;
        Ok(path)
    }
}
