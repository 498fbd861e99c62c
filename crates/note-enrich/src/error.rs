//! Enrichment error types.
//!
//! Every variant means "use the local strategy". Callers log these and never
//! surface them to the end user.

use thiserror::Error;

/// Errors that can occur when asking an external text model for enrichment.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    /// Enrichment is switched off or has no credentials.
    #[error("enrichment disabled")]
    Disabled,

    /// HTTP transport error (connection refused, TLS, DNS).
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The request exceeded the configured time bound.
    #[error("enrichment request timed out")]
    Timeout,

    /// Provider API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider answered but the completion had no text.
    #[error("empty completion")]
    EmptyResponse,

    /// The completion failed local validation.
    #[error("completion rejected: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for EnrichmentError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::Parse(error.to_string())
        } else {
            Self::Http(error)
        }
    }
}
