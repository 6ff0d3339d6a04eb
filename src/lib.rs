//! Proof-of-contribution verifier for question/answer datasets.
//!
//! # Public API Surface
//!
//! The crate backs the `sixgpt-proof` binary and the integration tests. The
//! exports are organized by pipeline stage:
//!
//! ## Input
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//! - [`find_input_file`], [`extract_data`] - Archive discovery and extraction
//! - [`Record`], [`validate`], [`decode`] - Record schema checks
//!
//! ## Verification
//! - [`sample`], [`sample_size`] - Uniform sampling without replacement
//! - [`ReferenceFetcher`], [`WikipediaFetcher`] - Reference article lookup
//! - [`QualityEvaluator`], [`SixgptEvaluator`] - Remote rating service
//! - [`VerificationEngine`], [`VerificationOutcome`] - Sequential sample pass
//!
//! ## Scoring
//! - [`ScoreAggregator`], [`AggregateScore`] - Weighted, size-scaled score
//! - [`Proof`], [`ProofResponse`] - End-to-end run and its published result
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod dataset;
pub mod extract;
pub mod proof;
pub mod quality;
pub mod reference;
pub mod sampling;
pub mod verification;

pub use config::{Config, ConfigError};
pub use dataset::{Record, RecordContext, decode, validate};
pub use extract::{ExtractError, ExtractResult, extract_data, find_input_file, read_archive};
pub use proof::{
    AggregateScore, Proof, ProofAttributes, ProofError, ProofMetadata, ProofResponse,
    ProofResult, ScoreAggregator, build_evaluator, build_fetcher,
};
#[cfg(any(test, feature = "mock"))]
pub use quality::MockQualityEvaluator;
pub use quality::{QualityError, QualityEvaluator, QualityResult, SixgptEvaluator};
#[cfg(any(test, feature = "mock"))]
pub use reference::MockReferenceFetcher;
pub use reference::{
    ArticleSections, ReferenceError, ReferenceFetcher, ReferenceResult, WikipediaFetcher,
};
pub use sampling::{sample, sample_size};
pub use verification::{
    AbortReason, VerificationAccumulator, VerificationEngine, VerificationOutcome,
    jaccard_similarity,
};
