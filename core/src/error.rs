//! Error types for the Codeforces API client.
//!
//! # Design
//! Four failure sources are kept apart so callers can tell them apart
//! without string matching: local argument validation (raised before any
//! network call), a `FAILED` envelope reported by the server, an envelope
//! that is missing a required field, and the HTTP layer itself. `Remote`
//! displays exactly the server's comment text.

/// Errors returned by `CodeforcesClient` and `CodeforcesApi`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An argument failed local validation; no request was sent.
    #[error("invalid argument: {0}")]
    Validation(String),

    /// The server answered with a non-`OK` status.
    #[error("{comment}")]
    Remote { comment: String },

    /// The response envelope lacks a required field.
    #[error("malformed response: missing required field `{field}`")]
    MalformedResponse { field: String },

    /// The server returned a non-2xx status without a JSON envelope.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The body or the `result` payload could not be decoded.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request never completed (DNS, connect, TLS, body read).
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),
}

impl ApiError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        ApiError::MalformedResponse {
            field: field.to_string(),
        }
    }
}
