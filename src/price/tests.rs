//! Tests for the price client.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{PriceClient, PriceConfig, PriceError};

fn test_config(server_url: &str) -> PriceConfig {
    PriceConfig {
        endpoint: format!("{}/api/v3/simple/price", server_url),
        asset: "bitcoin".to_string(),
        currency: "usd".to_string(),
    }
}

#[tokio::test]
async fn test_fetch_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/simple/price"))
        .and(query_param("ids", "bitcoin"))
        .and(query_param("vs_currencies", "usd"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"bitcoin": {"usd": 67890.12}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = PriceClient::new(test_config(&server.uri()));
    let quote = client.fetch().await.unwrap();

    assert_eq!(quote.asset, "bitcoin");
    assert_eq!(quote.currency, "usd");
    assert_eq!(quote.value, 67890.12);
    assert_eq!(quote.display_text(), "$67890.12");
}

#[tokio::test]
async fn test_fetch_other_pair() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("ids", "ethereum"))
        .and(query_param("vs_currencies", "eur"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"ethereum": {"eur": 3012.5}})),
        )
        .mount(&server)
        .await;

    let client = PriceClient::new(PriceConfig {
        asset: "ethereum".to_string(),
        currency: "eur".to_string(),
        ..test_config(&server.uri())
    });
    let quote = client.fetch().await.unwrap();

    assert_eq!(quote.display_text(), "$3012.5");
}

#[tokio::test]
async fn test_fetch_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = PriceClient::new(test_config(&server.uri()));
    let err = client.fetch().await.unwrap_err();

    match err {
        PriceError::BadResponse { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected BadResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = PriceClient::new(test_config(&server.uri()));
    let err = client.fetch().await.unwrap_err();

    assert!(matches!(err, PriceError::BadResponse { status: 429, .. }));
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let client = PriceClient::new(test_config(&server.uri()));
    let err = client.fetch().await.unwrap_err();

    assert!(matches!(err, PriceError::MalformedPayload(_)));
}

#[tokio::test]
async fn test_fetch_missing_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = PriceClient::new(test_config(&server.uri()));
    let err = client.fetch().await.unwrap_err();

    assert!(matches!(err, PriceError::MissingField { .. }));
    assert_eq!(err.to_string(), "missing price field bitcoin.usd");
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = PriceClient::new(test_config(&uri));
    let err = client.fetch().await.unwrap_err();

    assert!(matches!(err, PriceError::Network(_)));
}

#[test]
fn test_default_config() {
    let config = PriceConfig::default();
    assert_eq!(config.endpoint, super::DEFAULT_ENDPOINT);
    assert_eq!(config.asset, "bitcoin");
    assert_eq!(config.currency, "usd");
}
