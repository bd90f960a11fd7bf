//! Client core for the product management app.
//!
//! # Overview
//! Two components, composed top-down. [`ProductGateway`] wraps the CRUD
//! operations of the remote `/api/productos` JSON resource — list, get,
//! create, update, delete — and owns (de)serialization plus the fixed
//! timeout policy. [`ProductStore`] is the view-model: it holds the
//! observable `items` / `loading` / `error` snapshot and turns each user
//! intent into "raise loading, call the gateway, publish the outcome".
//!
//! # Design
//! - `ProductClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network; [`Transport`] is the IO seam.
//!   Production code plugs in [`UreqTransport`], tests plug in fakes.
//! - The store never patches `items` locally: every successful mutation
//!   re-fetches the full list, so the UI always renders server truth.
//! - Input validation (non-blank name, positive price) happens at the UI
//!   boundary via `validate()` on the DTOs and never reaches the network.

pub mod client;
pub mod error;
pub mod gateway;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;

pub use client::ProductClient;
pub use error::{ApiError, ValidationError};
pub use gateway::ProductGateway;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use store::{ProductStore, StoreState};
pub use transport::UreqTransport;
pub use types::{NewProduct, Product};
