//! Stateless HTTP request builder and response parser for the order endpoints.
//!
//! # Design
//! `OrderClient` holds only a `base_url`. Each operation is a `build_*`
//! method producing an `HttpRequest`; the caller executes the round-trip.
//! Identifiers are forwarded untouched, so a negative id reaches the server
//! and the server decides.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Order;

/// Public pet-store demo API.
pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

const ACCEPT: (&str, &str) = ("accept", "application/json");
const CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Synchronous, stateless client for `/store/order`.
#[derive(Debug, Clone)]
pub struct OrderClient {
    base_url: String,
}

impl Default for OrderClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl OrderClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_create_order(&self, order: &Order) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&order.to_wire()).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/store/order", self.base_url),
            headers: headers(&[ACCEPT, CONTENT_TYPE]),
            body: Some(body),
        })
    }

    pub fn build_get_order(&self, order_id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.order_url(order_id),
            headers: headers(&[ACCEPT]),
            body: None,
        }
    }

    pub fn build_delete_order(&self, order_id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.order_url(order_id),
            headers: headers(&[ACCEPT]),
            body: None,
        }
    }

    /// Decode the order carried by a create or get response.
    pub fn parse_order(response: &HttpResponse) -> Result<Order, ApiError> {
        check_status(response)?;
        Order::from_wire_str(&response.body)
    }

    fn order_url(&self, order_id: i64) -> String {
        format!("{}/store/order/{order_id}", self.base_url)
    }
}

fn headers(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
