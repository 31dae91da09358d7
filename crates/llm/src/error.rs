//! Failure taxonomy for upstream LLM calls.
//!
//! Every failure of the completion endpoint lands in one of three
//! buckets so callers can surface a diagnostic without inspecting
//! transport details.

use thiserror::Error;

/// An error from the upstream completion service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never produced a usable HTTP response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("api error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// The response body could not be interpreted.
    #[error("malformed response: {0}")]
    Malformed(String),
}
