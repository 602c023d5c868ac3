//! Synchronous client core for the pet-store order endpoints.
//!
//! # Overview
//! Builds `HttpRequest` values and reads `HttpResponse` values without
//! touching the network (host-does-IO pattern). The `petstore` binary runs
//! the actual HTTP round-trip.
//!
//! # Design
//! - `OrderClient` is stateless; it holds only `base_url`.
//! - `Order` owns its wire mapping (`to_wire` / `from_wire`), a fixed
//!   six-key JSON object with camelCase renames.
//! - The mock-server crate defines its own order type; integration tests
//!   catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{OrderClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{Exchange, HttpMethod, HttpRequest, HttpResponse};
pub use types::Order;
