mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::TestApp;

#[tokio::test]
async fn health_check_returns_200() {
    let app = TestApp::new();

    let response = app.get("/api/healthz").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = TestApp::new();

    let response = app.get("/api/healthz").await;
    assert!(!response.headers["x-request-id"].is_empty());
    assert_eq!(response.headers["x-content-type-options"], "nosniff");
    assert_eq!(response.headers["x-frame-options"], "DENY");

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/healthz")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app.request(request).await;
    assert_eq!(response.headers["x-request-id"], "req-42");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = TestApp::new();

    let response = app.get("/api/nope").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
