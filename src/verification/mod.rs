//! Per-record authenticity and quality verification.
//!
//! For each sampled record the engine fetches the reference article for the
//! record's title, compares word sets with the submitted context, and asks the
//! rating service for question and answer ratings. Authenticity is a hard
//! gate: one record under the threshold, or any failed external call, aborts
//! the pass and zeroes everything. Only a clean pass is followed by the
//! uniqueness rating over the sampled titles; its failure aborts as well.

pub mod engine;
pub mod similarity;
pub mod types;


pub use engine::VerificationEngine;
pub use similarity::jaccard_similarity;
pub use types::{AbortReason, VerificationAccumulator, VerificationOutcome};
