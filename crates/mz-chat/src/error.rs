//! Chat client error types.

use thiserror::Error;

/// Errors that can occur while asking the model for a reply.
#[derive(Debug, Error)]
pub enum ChatError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response carried no text content.
    #[error("model returned no text")]
    EmptyReply,

    /// No API key was configured.
    #[error("no API key configured")]
    MissingApiKey,
}
