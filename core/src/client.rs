//! Stateless HTTP request builder and response parser for the producto API.
//!
//! # Design
//! `ProductClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`]; [`crate::gateway::ProductGateway`] wires the two halves
//! to a transport. Any 2xx status counts as success — the remote service
//! answers writes with 200 and a body the client ignores.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewProduct, Product};

const RESOURCE: &str = "/api/productos";

/// Stateless builder/parser for the `/api/productos` resource.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{RESOURCE}", self.base_url),
            body: None,
        }
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{RESOURCE}/{id}", self.base_url),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewProduct) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{RESOURCE}", self.base_url),
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: i64, product: &Product) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(product).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}{RESOURCE}/{id}", self.base_url),
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}{RESOURCE}/{id}", self.base_url),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Product>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Product, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Writes succeed on any 2xx; the response body is discarded.
    pub fn parse_write(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

/// Map non-2xx responses to `ApiError::Server` with the raw status and body.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(ApiError::Server {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ProductClient {
        ProductClient::new("http://localhost:8080")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_produces_correct_request() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/api/productos");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_get_produces_correct_request() {
        let req = client().build_get(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/api/productos/42");
    }

    #[test]
    fn build_create_produces_correct_request() {
        let input = NewProduct {
            name: "Teclado".to_string(),
            price: 19.99,
        };
        let req = client().build_create(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8080/api/productos");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["nombre"], "Teclado");
        assert_eq!(body["precio"], 19.99);
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_produces_correct_request() {
        let product = Product {
            id: Some(3),
            name: "Teclado mecánico".to_string(),
            price: 49.9,
        };
        let req = client().build_update(3, &product).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:8080/api/productos/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 3);
        assert_eq!(body["nombre"], "Teclado mecánico");
    }

    #[test]
    fn build_delete_produces_correct_request() {
        let req = client().build_delete(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:8080/api/productos/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_success() {
        let products = client()
            .parse_list(ok(r#"[{"id":1,"nombre":"Teclado","precio":19.99}]"#))
            .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, Some(1));
        assert_eq!(products[0].name, "Teclado");
    }

    #[test]
    fn parse_list_tolerates_extra_fields() {
        let body = r#"[{"id":1,"nombre":"Teclado","precio":19.99,"fechaCreacion":"2025-01-01T00:00:00"}]"#;
        let products = client().parse_list(ok(body)).unwrap();
        assert_eq!(products[0].price, 19.99);
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client().parse_list(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_get_not_found_is_a_server_error() {
        let response = HttpResponse {
            status: 404,
            body: String::new(),
        };
        let err = client().parse_get(response).unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 404, .. }));
    }

    #[test]
    fn parse_write_accepts_any_2xx() {
        for status in [200, 201, 204] {
            let response = HttpResponse {
                status,
                body: String::new(),
            };
            assert!(client().parse_write(response).is_ok(), "status: {status}");
        }
    }

    #[test]
    fn parse_write_ignores_the_body() {
        let response = ok("Producto eliminado correctamente");
        assert!(client().parse_write(response).is_ok());
    }

    #[test]
    fn parse_write_surfaces_server_errors() {
        let response = HttpResponse {
            status: 500,
            body: "internal error".to_string(),
        };
        let err = client().parse_write(response).unwrap_err();
        assert!(matches!(err, ApiError::Server { status: 500, .. }));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ProductClient::new("http://localhost:8080/");
        let req = client.build_list();
        assert_eq!(req.url, "http://localhost:8080/api/productos");
    }
}
