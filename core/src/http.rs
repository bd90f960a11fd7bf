//! Plain-data HTTP types and the transport seam.
//!
//! # Design
//! Requests and responses are described as plain data so the layer that
//! builds and parses them ([`crate::client::ProductClient`]) stays
//! deterministic and free of IO. The [`Transport`] trait is the single point
//! where the network happens: production code uses
//! [`crate::transport::UreqTransport`], store tests substitute an in-memory
//! fake. The API carries no custom headers; a transport sets
//! `Content-Type: application/json` whenever a body is present.

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, built by
/// `ProductClient::build_*` methods.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<String>,
}

/// An HTTP response described as plain data, consumed by
/// `ProductClient::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one HTTP round-trip.
///
/// Implementations must report transport-level failures (connect, timeout,
/// truncated body) as [`ApiError::Transport`] and return non-2xx responses
/// as data — status interpretation belongs to the parse layer.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
