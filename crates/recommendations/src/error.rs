//! Recommendation error types.

use std::time::Duration;

use thiserror::Error;

/// Why a fetch from the book service failed.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connecting, sending or reading failed, including timeouts.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The book service answered with a non-success status.
    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a list of books.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The fetch did not finish within the service's deadline.
    #[error("No response within {0:?}")]
    TimedOut(Duration),

    /// The book service could not be reached.
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while building recommendations.
#[derive(Debug, Error)]
pub enum RecommendationError {
    /// The catalog could not be fetched. The cause is kept for logging
    /// and is not part of the message.
    #[error("BookService is currently unavailable. Please try again later.")]
    UpstreamUnavailable(#[source] UpstreamError),
}

/// Convenience type alias for recommendation results.
pub type Result<T> = std::result::Result<T, RecommendationError>;
