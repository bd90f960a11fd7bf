//! Remote data gateway: one round-trip per operation.
//!
//! # Design
//! `ProductGateway` composes the deterministic build/parse layer with a
//! [`Transport`]. It holds no state besides the base URL (inside the client)
//! and the transport; every call is independent and nothing is cached or
//! retried.

use crate::client::ProductClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{NewProduct, Product};

pub struct ProductGateway<T: Transport> {
    client: ProductClient,
    transport: T,
}

impl<T: Transport> ProductGateway<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: ProductClient::new(base_url),
            transport,
        }
    }

    /// Fetch the complete product collection.
    pub fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.transport.execute(self.client.build_list())?;
        self.client.parse_list(response)
    }

    /// Fetch a single product by id. An unknown id surfaces as
    /// `Server { status: 404, .. }`.
    pub fn get(&self, id: i64) -> Result<Product, ApiError> {
        let response = self.transport.execute(self.client.build_get(id))?;
        self.client.parse_get(response)
    }

    /// Create a product; the server assigns the id. The response body is
    /// ignored — callers resynchronize with a fresh [`list`](Self::list).
    pub fn create(&self, input: &NewProduct) -> Result<(), ApiError> {
        let request = self.client.build_create(input)?;
        let response = self.transport.execute(request)?;
        self.client.parse_write(response)
    }

    /// Update the product with the given id in place.
    pub fn update(&self, id: i64, product: &Product) -> Result<(), ApiError> {
        let request = self.client.build_update(id, product)?;
        let response = self.transport.execute(request)?;
        self.client.parse_write(response)
    }

    /// Delete the product with the given id.
    pub fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete(id))?;
        self.client.parse_write(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};
    use std::sync::Mutex;

    /// Records every request and answers with a canned response.
    struct Canned {
        status: u16,
        body: &'static str,
        seen: Mutex<Vec<(HttpMethod, String)>>,
    }

    impl Canned {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for Canned {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.lock().unwrap().push((request.method, request.url));
            Ok(HttpResponse {
                status: self.status,
                body: self.body.to_string(),
            })
        }
    }

    #[test]
    fn list_executes_one_get_and_decodes() {
        let gateway = ProductGateway::new(
            "http://test",
            Canned::new(200, r#"[{"id":1,"nombre":"Teclado","precio":19.99}]"#),
        );
        let products = gateway.list().unwrap();
        assert_eq!(products.len(), 1);
        let seen = gateway.transport.seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![(HttpMethod::Get, "http://test/api/productos".to_string())]
        );
    }

    #[test]
    fn delete_surfaces_404_as_server_error() {
        let gateway = ProductGateway::new("http://test", Canned::new(404, "Producto no encontrado"));
        let err = gateway.delete(9).unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 404, .. }));
    }

    #[test]
    fn transport_failures_pass_through() {
        struct Down;
        impl Transport for Down {
            fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
                Err(ApiError::Transport("connection refused".to_string()))
            }
        }
        let gateway = ProductGateway::new("http://test", Down);
        assert!(matches!(gateway.list(), Err(ApiError::Transport(_))));
    }
}
