#![allow(dead_code)]

// Common test utilities for integration tests

use poem::test::{TestClient, TestResponse};
use poem::Endpoint;
use request_body_api::api::build_app;
use serde_json::Value;

/// Creates a test client over the fully composed application
pub fn test_client() -> TestClient<impl Endpoint> {
    TestClient::new(build_app("http://localhost:8000".to_string()))
}

/// Reads a response body as JSON
pub async fn body_json(response: TestResponse) -> Value {
    response
        .0
        .into_body()
        .into_json()
        .await
        .expect("response body should be JSON")
}

/// Fixed listing returned by every query parameter endpoint
pub fn listing() -> Value {
    serde_json::json!([
        {"naija_news": "Nairaland.com"},
        {"naija_entertainment": "Naijaloaded.com"}
    ])
}
