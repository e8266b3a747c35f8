//! Tests for the Warframe Market client.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::MarketClient;
use crate::config::MarketConfig;
use wfm_common::{MarketError, OrderType, Platform};

fn client_for(server: &MockServer) -> MarketClient {
    MarketClient::new(&MarketConfig::with_base_url(server.uri())).unwrap()
}

// ── fetch_items ──────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_items_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "payload": { "items": [
                { "item_name": "Forma Blueprint", "url_name": "forma_blueprint" },
                { "item_name": "Vasto Prime Barrel", "url_name": "vasto_prime_barrel" }
            ]}
        })))
        .mount(&mock_server)
        .await;

    let items = client_for(&mock_server).fetch_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].url_name, "vasto_prime_barrel");
}

#[tokio::test]
async fn fetch_items_500_returns_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    match client_for(&mock_server).fetch_items().await {
        Err(MarketError::HttpStatus(status)) => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
        }
        other => panic!("Expected MarketError::HttpStatus(500), got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_items_malformed_body_returns_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&mock_server)
        .await;

    match client_for(&mock_server).fetch_items().await {
        Err(MarketError::Parse(_)) => {}
        other => panic!("Expected MarketError::Parse, got: {other:?}"),
    }
}

// ── fetch_orders / fetch_statistics ──────────────────────────────────

#[tokio::test]
async fn fetch_orders_sends_platform_and_language_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items/forma_blueprint/orders"))
        .and(header("Platform", "xbox"))
        .and(header("Language", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "payload": { "orders": [
                { "platinum": 12, "quantity": 1, "order_type": "sell", "visible": true,
                  "user": { "status": "online" } }
            ]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let orders = client_for(&mock_server)
        .fetch_orders("forma_blueprint", Platform::Xbox)
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_type, OrderType::Sell);
}

#[tokio::test]
async fn fetch_orders_404_is_reported_as_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items/unknown_item/orders"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch_orders("unknown_item", Platform::Pc)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn fetch_statistics_returns_48_hour_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/items/forma_blueprint/statistics"))
        .and(header("Platform", "pc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "payload": { "statistics_closed": {
                "48hours": [
                    { "volume": 10, "avg_price": 20.0 },
                    { "volume": 5, "avg_price": 50.0 }
                ],
                "90days": [ { "volume": 999, "avg_price": 1.0 } ]
            }}
        })))
        .mount(&mock_server)
        .await;

    let buckets = client_for(&mock_server)
        .fetch_statistics("forma_blueprint", Platform::Pc)
        .await
        .unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].volume, 10);
}

#[test]
fn base_url_trailing_slash_is_normalized() {
    let client = MarketClient::new(&MarketConfig::with_base_url("http://localhost:1/v1/")).unwrap();
    assert_eq!(client.base_url(), "http://localhost:1/v1");
}
