//! Proof-of-contribution scoring.
//!
//! [`Proof`] runs the whole pipeline: extract the archive, validate and
//! decode the records, enforce the minimum dataset size, sample, verify the
//! sample, and aggregate the result into a [`ProofResponse`].
//!
//! # Failure policy
//!
//! Only structural problems with the input (no archive, missing
//! `examples.data`, invalid JSON) propagate as [`ProofError`]. A dataset that
//! fails the schema, is too small, or aborts verification is rejected with a
//! nil response: every score dimension zero and `valid = false`, with
//! `number_examples` and `number_sampled` still reported.

pub mod aggregate;
pub mod error;
pub mod factory;
pub mod response;
pub mod runner;


pub use aggregate::{AggregateScore, ScoreAggregator};
pub use error::{ProofError, ProofResult};
pub use factory::{build_evaluator, build_fetcher};
pub use response::{ProofAttributes, ProofMetadata, ProofResponse};
pub use runner::Proof;
