//! Tests for the API entry point and health routes

use axum::http::StatusCode;
use axum_test::TestServer;
use learn_rest_api::prelude::*;
use serde_json::{Value, json};

async fn make_server() -> TestServer {
    TestServer::new(ServerBuilder::new().build().await.unwrap())
}

#[tokio::test]
async fn test_index() {
    let server = make_server().await;

    let response = server.get("/api").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.header("content-type"), HAL_JSON);
    let body: Value = response.json();
    assert_eq!(body, json!({ "_links": { "events": { "href": "/api/events" } } }));
}

#[tokio::test]
async fn test_error_resource_index_link_is_navigable() {
    let server = make_server().await;

    let error: Value = server.post("/api/events").json(&json!({})).await.json();
    let index_href = error["_links"]["index"]["href"].as_str().unwrap();

    let index: Value = server.get(index_href).await.json();
    assert_eq!(index["_links"]["events"]["href"], "/api/events");
}

#[tokio::test]
async fn test_health() {
    let server = make_server().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "learn-rest-api");
}
