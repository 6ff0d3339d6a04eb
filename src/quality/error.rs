use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the rating service.
pub enum QualityError {
    /// Transport failure, including timeouts.
    #[error("rating request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("rating endpoint '{endpoint}' returned status {status}")]
    Status {
        /// Endpoint path.
        endpoint: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// The response body did not carry a numeric rating.
    #[error("malformed response from '{endpoint}': {reason}")]
    MalformedResponse {
        /// Endpoint path.
        endpoint: &'static str,
        /// What was wrong.
        reason: String,
    },
}

pub type QualityResult<T> = Result<T, QualityError>;
