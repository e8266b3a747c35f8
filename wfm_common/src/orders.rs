//! Live order book from `GET /items/{url_name}/orders`

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Sell,
    Buy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Ingame,
    Online,
    Offline,
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    /// Seller can be traded with right now
    pub fn is_reachable(&self) -> bool {
        matches!(self, UserStatus::Ingame | UserStatus::Online)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderUser {
    pub status: UserStatus,
    #[serde(default)]
    pub ingame_name: Option<String>,
}

/// A single open order
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub platinum: f64,
    #[serde(default)]
    pub quantity: u32,
    pub order_type: OrderType,
    pub visible: bool,
    pub user: OrderUser,
}

#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    pub payload: OrdersPayload,
}

#[derive(Debug, Deserialize)]
pub struct OrdersPayload {
    pub orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_response_deserializes() {
        let json = r#"{
            "payload": {
                "orders": [
                    {"platinum": 15, "quantity": 2, "order_type": "sell", "visible": true,
                     "user": {"status": "ingame", "ingame_name": "Tenno"}},
                    {"platinum": 9.0, "quantity": 1, "order_type": "buy", "visible": false,
                     "user": {"status": "offline"}}
                ]
            }
        }"#;

        let response: OrdersResponse = serde_json::from_str(json).unwrap();
        let orders = response.payload.orders;
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_type, OrderType::Sell);
        assert_eq!(orders[0].user.status, UserStatus::Ingame);
        assert_eq!(orders[0].user.ingame_name.as_deref(), Some("Tenno"));
        assert!((orders[1].platinum - 9.0).abs() < f64::EPSILON);
        assert!(!orders[1].visible);
    }

    #[test]
    fn unknown_status_is_not_reachable() {
        let user: OrderUser = serde_json::from_str(r#"{"status": "invisible"}"#).unwrap();
        assert_eq!(user.status, UserStatus::Unknown);
        assert!(!user.status.is_reachable());
        assert!(UserStatus::Online.is_reachable());
    }
}
