use thiserror::Error;

use crate::extract::ExtractError;
use crate::quality::QualityError;
use crate::reference::ReferenceError;

/// Failures that end a run without producing a [`ProofResponse`].
///
/// Rejected contributions are not errors; they yield a nil response.
///
/// [`ProofResponse`]: super::ProofResponse
#[derive(Debug, Error)]
pub enum ProofError {
    #[error("input error: {0}")]
    Extract(#[from] ExtractError),

    #[error("failed to build reference client: {0}")]
    ReferenceClient(#[from] ReferenceError),

    #[error("failed to build rating client: {0}")]
    RatingClient(#[from] QualityError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize proof response: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type ProofResult<T> = Result<T, ProofError>;
