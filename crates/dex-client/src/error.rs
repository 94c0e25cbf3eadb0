//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the listing or detail endpoints.
///
/// The repository treats every variant the same way (log and continue); the
/// variants exist so callers that care can tell them apart.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport or JSON decode error.
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

    /// A response decoded but lacked a field dex needs.
    #[error("response missing field: {0}")]
    MissingField(&'static str),

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
