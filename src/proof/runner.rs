use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;
use tracing::{info, warn};

use super::aggregate::ScoreAggregator;
use super::error::ProofResult;
use super::factory::{build_evaluator, build_fetcher};
use super::response::ProofResponse;
use crate::config::Config;
use crate::constants::AUTHENTICITY_THRESHOLD;
use crate::dataset::decode;
use crate::extract::{extract_data, find_input_file};
use crate::quality::QualityEvaluator;
use crate::reference::ReferenceFetcher;
use crate::sampling;
use crate::verification::{VerificationEngine, VerificationOutcome};

/// One proof-of-contribution run over a submitted dataset.
pub struct Proof {
    dlp_id: u64,
    input_dir: PathBuf,
    min_examples: usize,
    sample_seed: Option<u64>,
    authenticity_threshold: f64,
    aggregator: ScoreAggregator,
    fetcher: Arc<dyn ReferenceFetcher>,
    evaluator: Arc<dyn QualityEvaluator>,
}

impl std::fmt::Debug for Proof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proof")
            .field("dlp_id", &self.dlp_id)
            .field("input_dir", &self.input_dir)
            .field("min_examples", &self.min_examples)
            .field("sample_seed", &self.sample_seed)
            .field("authenticity_threshold", &self.authenticity_threshold)
            .field("aggregator", &self.aggregator)
            .finish_non_exhaustive()
    }
}

impl Proof {
    pub fn new(
        config: &Config,
        fetcher: Arc<dyn ReferenceFetcher>,
        evaluator: Arc<dyn QualityEvaluator>,
    ) -> Self {
        Self {
            dlp_id: config.dlp_id,
            input_dir: config.input_dir.clone(),
            min_examples: config.min_examples,
            sample_seed: config.sample_seed,
            authenticity_threshold: AUTHENTICITY_THRESHOLD,
            aggregator: ScoreAggregator::default(),
            fetcher,
            evaluator,
        }
    }

    /// Wires the encyclopedia and rating-service clients from `config`.
    pub fn from_config(config: &Config) -> ProofResult<Self> {
        let fetcher = build_fetcher(config)?;
        let evaluator = build_evaluator(config)?;
        Ok(Self::new(config, fetcher, evaluator))
    }

    pub fn with_aggregator(mut self, aggregator: ScoreAggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub fn with_authenticity_threshold(mut self, threshold: f64) -> Self {
        self.authenticity_threshold = threshold;
        self
    }

    pub fn dlp_id(&self) -> u64 {
        self.dlp_id
    }

    pub fn min_examples(&self) -> usize {
        self.min_examples
    }

    /// Scores the archive found in the configured input directory.
    pub async fn generate(&self) -> ProofResult<ProofResponse> {
        info!(input_dir = %self.input_dir.display(), "Starting proof generation");
        let archive = find_input_file(&self.input_dir)?;
        self.generate_for_archive(&archive).await
    }

    /// Scores the archive at `path`, sampling with the configured seed or entropy.
    pub async fn generate_for_archive(&self, path: &Path) -> ProofResult<ProofResponse> {
        let mut rng = match self.sample_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let raw = extract_data(path)?;
        Ok(self.evaluate(&raw, &mut rng).await)
    }

    /// Scores an already-extracted dataset.
    ///
    /// Never fails: a malformed, undersized or unverifiable dataset yields a
    /// nil response.
    pub async fn evaluate<R: Rng + ?Sized>(&self, raw: &Value, rng: &mut R) -> ProofResponse {
        let Some(records) = decode(raw) else {
            let number_examples = raw.as_array().map_or(0, Vec::len);
            warn!(number_examples, "Dataset failed schema validation");
            return ProofResponse::nil(self.dlp_id, number_examples, 0);
        };

        let number_examples = records.len();
        info!(number_examples, "Extracted examples");

        if number_examples < self.min_examples {
            warn!(
                number_examples,
                min_examples = self.min_examples,
                "Dataset below minimum size"
            );
            return ProofResponse::nil(self.dlp_id, number_examples, 0);
        }

        let sample = sampling::sample(&records, self.min_examples, rng);
        let number_sampled = sample.len();

        let engine = VerificationEngine::new(self.fetcher.as_ref(), self.evaluator.as_ref())
            .with_authenticity_threshold(self.authenticity_threshold);

        let (totals, uniqueness) = match engine.verify(&sample).await {
            VerificationOutcome::Verified { totals, uniqueness } => (totals, uniqueness),
            VerificationOutcome::Aborted { .. } => {
                return ProofResponse::nil(self.dlp_id, number_examples, number_sampled);
            }
        };

        let aggregate = self.aggregator.aggregate(
            totals.authenticity_sum,
            totals.quality_sum,
            uniqueness,
            number_examples,
        );

        info!(
            score = aggregate.score,
            total_score = aggregate.total_score,
            valid = aggregate.valid,
            number_examples,
            number_sampled,
            "Proof generated"
        );

        ProofResponse::verified(
            self.dlp_id,
            &totals,
            uniqueness,
            &aggregate,
            number_examples,
            number_sampled,
        )
    }
}
