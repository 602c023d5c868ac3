use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<i64>,
    pub pet_id: Option<i64>,
    pub quantity: Option<i32>,
    pub ship_date: Option<String>,
    pub status: Option<String>,
    pub complete: Option<bool>,
}

/// Envelope the store uses for errors and delete acknowledgements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub code: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl ApiMessage {
    fn new(code: i32, kind: &str, message: impl Into<String>) -> Self {
        Self {
            code,
            kind: kind.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct Store {
    orders: HashMap<i64, Order>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            orders: HashMap::new(),
            next_id: 1,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiMessage>)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/store/order", post(place_order))
        .route("/store/order/{order_id}", get(get_order).delete(delete_order))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn place_order(State(db): State<Db>, Json(mut order): Json<Order>) -> Json<Order> {
    let mut store = db.write().await;
    let id = match order.id {
        Some(id) => id,
        None => {
            let id = store.next_id;
            store.next_id += 1;
            id
        }
    };
    order.id = Some(id);
    store.orders.insert(id, order.clone());
    tracing::debug!(id, "order placed");
    Json(order)
}

async fn get_order(State(db): State<Db>, Path(order_id): Path<i64>) -> ApiResult<Order> {
    let store = db.read().await;
    store
        .orders
        .get(&order_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(1, "error"))
}

async fn delete_order(State(db): State<Db>, Path(order_id): Path<i64>) -> ApiResult<ApiMessage> {
    let mut store = db.write().await;
    store
        .orders
        .remove(&order_id)
        .map(|_| Json(ApiMessage::new(200, "unknown", order_id.to_string())))
        .ok_or_else(|| not_found(404, "unknown"))
}

fn not_found(code: i32, kind: &str) -> (StatusCode, Json<ApiMessage>) {
    (StatusCode::NOT_FOUND, Json(ApiMessage::new(code, kind, "Order not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_serializes_with_camel_case_keys() {
        let order = Order {
            id: Some(1),
            pet_id: Some(2),
            quantity: Some(3),
            ship_date: Some("2024-01-01T00:00:00Z".to_string()),
            status: Some("placed".to_string()),
            complete: Some(true),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["petId"], 2);
        assert_eq!(json["shipDate"], "2024-01-01T00:00:00Z");
        assert!(json.get("pet_id").is_none());
    }

    #[test]
    fn order_accepts_nulls_and_missing_keys() {
        let order: Order = serde_json::from_str(r#"{"id":null,"status":"placed"}"#).unwrap();
        assert!(order.id.is_none());
        assert_eq!(order.status.as_deref(), Some("placed"));
        assert!(order.pet_id.is_none());
    }

    #[test]
    fn api_message_uses_type_key() {
        let msg = ApiMessage::new(1, "error", "Order not found");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "error");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn store_starts_numbering_at_one() {
        let store = Store::default();
        assert_eq!(store.next_id, 1);
        assert!(store.orders.is_empty());
    }
}
