//! Error types for the API client.

/// Errors that can occur when talking to the LDA API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The token is missing, or the API rejected it (HTTP 401/403).
    #[error("authentication failed: {0}")]
    Authentication(String),
    /// The search parameters are unusable (e.g. no identifying filter).
    #[error("invalid search: {0}")]
    Validation(String),
    /// Network-level failure: connection refused, DNS, timeout.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status other than an auth rejection.
    /// Carries the status and a snippet of the response body.
    #[error("request failed with status {status}")]
    Upstream { status: u16, body: String },
    /// The response body was not the expected JSON page envelope.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
