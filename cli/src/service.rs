//! The three order operations: build, execute once, hand back the exchange.

use petstore_core::{ApiError, Exchange, HttpRequest, Order, OrderClient};
use thiserror::Error;

use crate::transport::{Transport, TransportError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub struct OrderService {
    client: OrderClient,
    transport: Transport,
}

impl OrderService {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: OrderClient::new(base_url),
            transport: Transport::new(),
        }
    }

    pub fn create_order(&self, order: &Order) -> Result<Exchange, ServiceError> {
        let request = self.client.build_create_order(order)?;
        self.exchange(request)
    }

    pub fn get_order_by_id(&self, order_id: i64) -> Result<Exchange, ServiceError> {
        self.exchange(self.client.build_get_order(order_id))
    }

    pub fn delete_order_by_id(&self, order_id: i64) -> Result<Exchange, ServiceError> {
        self.exchange(self.client.build_delete_order(order_id))
    }

    fn exchange(&self, request: HttpRequest) -> Result<Exchange, ServiceError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(&request)?;
        tracing::debug!(status = response.status, bytes = response.body.len(), "received response");
        Ok(Exchange { request, response })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petstore_core::HttpMethod;

    fn spawn_mock_server() -> std::net::SocketAddr {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener).await
            })
            .unwrap();
        });

        addr
    }

    fn sample() -> Order {
        Order {
            id: Some(1),
            pet_id: Some(2),
            quantity: Some(3),
            ship_date: Some("2024-01-01T00:00:00Z".to_string()),
            status: Some("placed".to_string()),
            complete: Some(true),
        }
    }

    #[test]
    fn create_get_delete_round_trip() {
        let addr = spawn_mock_server();
        let service = OrderService::new(&format!("http://{addr}"));

        let created = service.create_order(&sample()).unwrap();
        assert_eq!(created.request.method, HttpMethod::Post);
        assert_eq!(created.request.url, format!("http://{addr}/store/order"));
        assert_eq!(created.response.status, 200);
        let sent: serde_json::Value = serde_json::from_str(created.request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            sent,
            serde_json::json!({
                "id": 1,
                "petId": 2,
                "quantity": 3,
                "shipDate": "2024-01-01T00:00:00Z",
                "status": "placed",
                "complete": true
            })
        );

        let fetched = service.get_order_by_id(1).unwrap();
        assert_eq!(fetched.response.status, 200);
        assert!(fetched.request.body.is_none());
        assert_eq!(Order::from_wire_str(&fetched.response.body).unwrap(), sample());
        assert!(fetched
            .response
            .headers
            .iter()
            .any(|(name, value)| name == "content-type" && value.starts_with("application/json")));

        let deleted = service.delete_order_by_id(1).unwrap();
        assert_eq!(deleted.request.method, HttpMethod::Delete);
        assert!(deleted.request.body.is_none());
        assert_eq!(deleted.response.status, 200);
    }

    #[test]
    fn remote_rejection_is_still_an_exchange() {
        let addr = spawn_mock_server();
        let service = OrderService::new(&format!("http://{addr}"));

        let missing = service.get_order_by_id(404).unwrap();
        assert_eq!(missing.response.status, 404);
        assert!(missing.response.body.contains("Order not found"));

        let negative = service.delete_order_by_id(-1).unwrap();
        assert_eq!(negative.request.url, format!("http://{addr}/store/order/-1"));
        assert_eq!(negative.response.status, 404);
    }

    #[test]
    fn connection_failure_is_a_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        let service = OrderService::new(&format!("http://{addr}"));

        let err = service.get_order_by_id(1).unwrap_err();
        assert!(matches!(err, ServiceError::Transport(TransportError::Request { .. })));
    }
}
