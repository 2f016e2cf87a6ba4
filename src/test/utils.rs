// Test utilities shared across unit tests
// Only compiled when running tests

use poem::test::{TestClient, TestResponse};
use poem::Endpoint;
use serde_json::Value;
use crate::api::build_app;

pub const TEST_SERVER_URL: &str = "http://localhost:8000";

/// Creates a test client over the fully composed application
pub fn test_client() -> TestClient<impl Endpoint> {
    TestClient::new(build_app(TEST_SERVER_URL.to_string()))
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
