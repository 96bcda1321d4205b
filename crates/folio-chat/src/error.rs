//! Chat fallback error types.

use thiserror::Error;

/// Failures of the hosted completion call. Every variant is recovered by
/// the widget into the apology reply.
#[derive(Debug, Error)]
pub enum ChatError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The body was not a `generated_text` object or list of them.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// No endpoint or token configured.
    #[error("chat fallback is not configured (set chat.api_token)")]
    NotConfigured,
}
