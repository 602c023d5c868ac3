//! Error types for the order client.
//!
//! # Design
//! `NotFound` gets its own variant because a missing order is the common
//! rejection from the store endpoints. Every other non-2xx status lands in
//! `Http` with the raw status and body kept for reporting.

use thiserror::Error;

/// Errors returned by `OrderClient` and the order wire mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("order not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// A wire record could not be turned into an `Order`.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
