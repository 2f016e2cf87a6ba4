mod common;

use common::{body_json, listing, test_client};
use poem::http::StatusCode;
use serde_json::json;

const LISTING_PATHS: [&str; 4] = [
    "/query_parameter/",
    "/query_parameter_with_limit/",
    "/query_parameter_as_optional_with_limit/",
    "/query_parameter_as_optional_with_limit_validation/",
];

#[tokio::test]
async fn test_listing_without_query_has_no_query_key() {
    let cli = test_client();

    for path in LISTING_PATHS {
        let resp = cli.get(path).send().await;

        resp.assert_status_is_ok();
        assert_eq!(body_json(resp).await, json!({"query_parameter": listing()}), "{}", path);
    }
}

#[tokio::test]
async fn test_listing_echoes_query() {
    let cli = test_client();

    for path in LISTING_PATHS {
        let resp = cli.get(format!("{}?query=naija_news", path)).send().await;

        resp.assert_status_is_ok();
        assert_eq!(
            body_json(resp).await,
            json!({"query_parameter": listing(), "query": "naija_news"}),
            "{}",
            path
        );
    }
}

#[tokio::test]
async fn test_limit_validation_accepts_minimum_length() {
    let cli = test_client();

    let resp = cli
        .get("/query_parameter_as_optional_with_limit_validation/?query=que")
        .send()
        .await;

    resp.assert_status_is_ok();
    assert_eq!(body_json(resp).await["query"], "que");
}

#[tokio::test]
async fn test_limit_validation_rejects_below_minimum() {
    let cli = test_client();

    let resp = cli
        .get("/query_parameter_as_optional_with_limit_validation/?query=qu")
        .send()
        .await;

    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(resp).await,
        json!({"detail": [{
            "loc": ["query", "query"],
            "msg": "String should have at least 3 characters",
            "type": "string_too_short",
            "input": "qu"
        }]})
    );
}

#[tokio::test]
async fn test_limited_endpoints_accept_fifty_characters() {
    let cli = test_client();
    let fifty = "q".repeat(50);

    for path in &LISTING_PATHS[1..] {
        let resp = cli.get(format!("{}?query={}", path, fifty)).send().await;

        resp.assert_status_is_ok();
        assert_eq!(body_json(resp).await["query"], json!(fifty), "{}", path);
    }
}

#[tokio::test]
async fn test_limited_endpoints_reject_fifty_one_characters() {
    let cli = test_client();
    let fifty_one = "q".repeat(51);

    for path in &LISTING_PATHS[1..] {
        let resp = cli.get(format!("{}?query={}", path, fifty_one)).send().await;

        resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await["detail"][0]["type"], "string_too_long", "{}", path);
    }
}

#[tokio::test]
async fn test_unlimited_endpoint_accepts_long_query() {
    let cli = test_client();
    let long = "q".repeat(200);

    let resp = cli.get(format!("/query_parameter/?query={}", long)).send().await;

    resp.assert_status_is_ok();
    assert_eq!(body_json(resp).await["query"], json!(long));
}

#[tokio::test]
async fn test_limit_validation_rejects_empty_query() {
    let cli = test_client();

    let resp = cli
        .get("/query_parameter_as_optional_with_limit_validation/?query=")
        .send()
        .await;

    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(resp).await,
        json!({"detail": [{
            "loc": ["query", "query"],
            "msg": "String should have at least 3 characters",
            "type": "string_too_short",
            "input": ""
        }]})
    );
}

#[tokio::test]
async fn test_empty_query_is_omitted_where_unbounded() {
    let cli = test_client();

    let resp = cli.get("/query_parameter/?query=").send().await;

    resp.assert_status_is_ok();
    assert_eq!(body_json(resp).await, json!({"query_parameter": listing()}));
}

#[tokio::test]
async fn test_listing_paths_resolve_without_trailing_slash() {
    let cli = test_client();

    for path in LISTING_PATHS {
        let resp = cli.get(format!("{}?query=naija_news", path.trim_end_matches('/'))).send().await;

        resp.assert_status_is_ok();
        assert_eq!(body_json(resp).await["query"], "naija_news", "{}", path);
    }
}
