//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant so logs can tell a stale id apart from
//! a server fault. Every other non-2xx status lands in `Status` with the raw
//! code and body. None of this detail reaches the user: the store shows one
//! fixed message per operation.

use thiserror::Error;

/// Errors produced while building requests, executing them, or parsing
/// responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Failure reported by a [`Transport`](crate::sync::Transport)
/// implementation: connection refused, DNS failure, broken pipe and so on.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport(err.0)
    }
}
