//! Error types for the producto API client.
//!
//! # Design
//! The gateway never parses structured error bodies, so a 404 is not given a
//! dedicated variant — it lands in `Server` with the raw status and body like
//! every other non-2xx response. Validation failures are a separate type
//! because they are resolved entirely at the UI boundary and never reach the
//! network.

use std::fmt;

/// Errors returned by the gateway and its underlying transport.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response: connect failure, timeout,
    /// broken connection.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Decode(String),

    /// The server answered with a non-2xx status.
    Server { status: u16, body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "network error: {msg}"),
            ApiError::Serialization(msg) => write!(f, "request serialization failed: {msg}"),
            ApiError::Decode(msg) => write!(f, "response decode failed: {msg}"),
            ApiError::Server { status, body } => write!(f, "HTTP {status}: {body}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client-side rejection of a product submission. Checked before any network
/// call; see [`crate::types::NewProduct::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The name is empty or whitespace-only.
    BlankName,

    /// The price is zero, negative, or NaN.
    NonPositivePrice(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BlankName => write!(f, "name must not be blank"),
            ValidationError::NonPositivePrice(price) => {
                write!(f, "price must be greater than 0 (got {price})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
