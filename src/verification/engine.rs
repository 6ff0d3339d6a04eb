use tracing::{debug, info, warn};

use crate::constants::AUTHENTICITY_THRESHOLD;
use crate::dataset::Record;
use crate::quality::QualityEvaluator;
use crate::reference::ReferenceFetcher;

use super::similarity::jaccard_similarity;
use super::types::{AbortReason, VerificationAccumulator, VerificationOutcome};

/// Drives reference lookups and ratings over a sample, one record at a time.
pub struct VerificationEngine<'a> {
    fetcher: &'a dyn ReferenceFetcher,
    evaluator: &'a dyn QualityEvaluator,
    authenticity_threshold: f64,
}

impl std::fmt::Debug for VerificationEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationEngine")
            .field("authenticity_threshold", &self.authenticity_threshold)
            .finish_non_exhaustive()
    }
}

impl<'a> VerificationEngine<'a> {
    pub fn new(fetcher: &'a dyn ReferenceFetcher, evaluator: &'a dyn QualityEvaluator) -> Self {
        Self {
            fetcher,
            evaluator,
            authenticity_threshold: AUTHENTICITY_THRESHOLD,
        }
    }

    pub fn with_authenticity_threshold(mut self, threshold: f64) -> Self {
        self.authenticity_threshold = threshold;
        self
    }

    pub fn authenticity_threshold(&self) -> f64 {
        self.authenticity_threshold
    }

    /// Verifies every record of `sample`, then rates the diversity of its topics.
    ///
    /// The first fetch failure, rating failure or record below the
    /// authenticity threshold aborts the whole pass; no further records are
    /// processed and nothing accumulated so far is kept.
    pub async fn verify(&self, sample: &[&Record]) -> VerificationOutcome {
        let mut totals = VerificationAccumulator::default();

        for record in sample {
            if let Err(reason) = self.verify_record(record, sample.len(), &mut totals).await {
                warn!(
                    status = reason.debug_status(),
                    reason = %reason,
                    "Verification aborted"
                );
                return VerificationOutcome::Aborted { reason };
            }
        }

        let topics: Vec<String> = sample.iter().map(|r| r.title().to_string()).collect();
        let uniqueness = match self.evaluator.uniqueness(&topics).await {
            Ok(rating) => rating,
            Err(source) => {
                let reason = AbortReason::Uniqueness { source };
                warn!(reason = %reason, "Verification aborted after sample pass");
                return VerificationOutcome::Aborted { reason };
            }
        };

        info!(
            sampled = sample.len(),
            authenticity = totals.authenticity_sum,
            quality = totals.quality_sum,
            uniqueness,
            "Sample verified"
        );

        VerificationOutcome::Verified { totals, uniqueness }
    }

    async fn verify_record(
        &self,
        record: &Record,
        sample_len: usize,
        totals: &mut VerificationAccumulator,
    ) -> Result<(), AbortReason> {
        let title = record.title();

        let reference = self
            .fetcher
            .fetch(title)
            .await
            .map_err(|source| AbortReason::Fetch {
                title: title.to_string(),
                source,
            })?;

        let similarity = jaccard_similarity(&reference, &record.context.content);
        debug!(title, similarity, "Context similarity");

        if similarity < self.authenticity_threshold {
            return Err(AbortReason::LowAuthenticity {
                title: title.to_string(),
                similarity,
                threshold: self.authenticity_threshold,
            });
        }

        let evaluation = |source| AbortReason::Evaluation {
            title: title.to_string(),
            source,
        };
        let question_rating = self
            .evaluator
            .evaluate_question(&record.input, &reference)
            .await
            .map_err(evaluation)?;
        let answer_rating = self
            .evaluator
            .evaluate_answer(&record.input, &record.output, &reference)
            .await
            .map_err(evaluation)?;

        debug!(title, question_rating, answer_rating, "Record rated");

        totals.add(similarity, question_rating, answer_rating, sample_len);
        Ok(())
    }
}
