use std::sync::Arc;

use crate::config::Config;
use crate::quality::{QualityEvaluator, QualityResult, SixgptEvaluator};
use crate::reference::{ReferenceFetcher, ReferenceResult, WikipediaFetcher};

/// Builds the production [`ReferenceFetcher`] for the config.
pub fn build_fetcher(config: &Config) -> ReferenceResult<Arc<dyn ReferenceFetcher>> {
    Ok(Arc::new(WikipediaFetcher::new(
        config.wikipedia_url.clone(),
        config.request_timeout,
    )?))
}

/// Builds the production [`QualityEvaluator`] for the config.
pub fn build_evaluator(config: &Config) -> QualityResult<Arc<dyn QualityEvaluator>> {
    Ok(Arc::new(SixgptEvaluator::new(
        config.sixgpt_url.clone(),
        config.sixgpt_api_key.clone(),
        config.request_timeout,
    )?))
}
