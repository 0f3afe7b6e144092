//! Error types for the heroes API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers of the `try_*`
//! operations frequently distinguish "the hero does not exist" from "the
//! server returned an unexpected status." All other non-2xx responses land in
//! `Http` with the raw status code and body for debugging.

use thiserror::Error;

/// Failure to complete an HTTP round-trip at all.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, reset mid-body, and the like.
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("request timed out")]
    Timeout,

    /// The request could not be built, usually a malformed base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Errors returned by `HeroClient` parse methods and the `try_*` service
/// operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
