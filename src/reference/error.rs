use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned while fetching a reference document.
pub enum ReferenceError {
    /// Transport failure, including timeouts.
    #[error("reference request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The encyclopedia answered with a non-success status.
    #[error("reference service returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The title does not resolve to an article with text.
    #[error("no reference article found for '{title}'")]
    NotFound {
        /// Requested title.
        title: String,
    },

    /// The response body did not have the expected shape.
    #[error("malformed reference response: {reason}")]
    MalformedResponse {
        /// What was wrong.
        reason: String,
    },
}

pub type ReferenceResult<T> = Result<T, ReferenceError>;
