//! Order model and its wire mapping.
//!
//! # Design
//! The serde attributes are the field-to-key table: `pet_id` travels as
//! `petId`, `ship_date` as `shipDate`, everything else keeps its name.
//! Every field is optional because the CLI accepts each one independently and
//! the remote service does all validation. Absent fields are written as
//! `null` so the wire record always carries the same six keys.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// A pet-store purchase order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub pet_id: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub ship_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub complete: Option<bool>,
}

impl Order {
    /// Flat JSON object with the keys `id, petId, quantity, shipDate, status, complete`.
    pub fn to_wire(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "petId": self.pet_id,
            "quantity": self.quantity,
            "shipDate": self.ship_date,
            "status": self.status,
            "complete": self.complete,
        })
    }

    /// Build an order from a wire record. Missing or `null` keys become `None`;
    /// a present value of the wrong JSON type is rejected.
    pub fn from_wire(record: &Value) -> Result<Self, ApiError> {
        Self::deserialize(record).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Decode a raw response body.
    pub fn from_wire_str(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}
