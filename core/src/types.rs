//! Domain DTOs for the producto API.
//!
//! # Design
//! These types mirror the remote service's schema but are defined
//! independently from the mock-server crate; integration tests catch schema
//! drift. The wire format keeps the server's Spanish field names (`nombre`,
//! `precio`) via serde renames. Unknown response fields (the real server adds
//! `fechaCreacion`) are ignored on decode, which keeps the client
//! forward-compatible.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single product as stored by the server.
///
/// `id` is `None` only for items that have not been created yet; every
/// product decoded from a response carries the server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

/// Request payload for creating a product. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

impl Product {
    /// Check the submission invariant: non-blank name, price strictly
    /// positive. Called at the UI boundary before any network call.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, self.price)
    }
}

impl NewProduct {
    /// Same invariant as [`Product::validate`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.name, self.price)
    }
}

fn validate_fields(name: &str, price: f64) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::NonPositivePrice(price));
    }
    Ok(())
}
