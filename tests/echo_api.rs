//! API contract tests for the echo service.
//!
//! Exercises the full router (auth gate + echo handler + health probe) via
//! in-process `oneshot` requests, asserting exact statuses and bodies.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use echod::config::{AppConfig, DEFAULT_BEARER_VALUE, MAX_INPUT_BYTES};
use echod::routes::create_router;
use echod::state::AppState;

fn build_app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

fn echo_request(method: &str, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = auth {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).expect("expected request to build")
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("expected response body")
        .to_vec()
}

#[tokio::test]
async fn valid_request_echoes_input_as_json() {
    let app = build_app();

    let response = app
        .oneshot(echo_request(
            "GET",
            "/echo?input=hello",
            Some(DEFAULT_BEARER_VALUE),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(body_bytes(response).await, br#"{"message":"Echo: hello"}"#);
}

#[tokio::test]
async fn missing_auth_header_is_unauthorized_with_no_json_body() {
    let app = build_app();

    let response = app
        .oneshot(echo_request("GET", "/echo?input=hello", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    // Plain-text rejection proves the echo handler never ran.
    assert_eq!(body_bytes(response).await, b"Unauthorized");
}

#[tokio::test]
async fn wrong_token_is_unauthorized() {
    let app = build_app();

    let response = app
        .oneshot(echo_request(
            "GET",
            "/echo?input=hello",
            Some("Bearer not-the-token"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_bytes(response).await, b"Unauthorized");
}

#[tokio::test]
async fn auth_is_checked_before_validation() {
    let app = build_app();

    // Invalid input AND missing auth: the gate wins, so 401 not 400.
    let response = app
        .oneshot(echo_request("GET", "/echo", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_input_is_invalid() {
    let app = build_app();

    let response = app
        .oneshot(echo_request("GET", "/echo", Some(DEFAULT_BEARER_VALUE)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_bytes(response).await, b"Invalid input");
}

#[tokio::test]
async fn boundary_lengths_are_enforced() {
    let at_limit = "x".repeat(MAX_INPUT_BYTES);
    let over_limit = "x".repeat(MAX_INPUT_BYTES + 1);

    let response = build_app()
        .oneshot(echo_request(
            "GET",
            &format!("/echo?input={at_limit}"),
            Some(DEFAULT_BEARER_VALUE),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = build_app()
        .oneshot(echo_request(
            "GET",
            &format!("/echo?input={over_limit}"),
            Some(DEFAULT_BEARER_VALUE),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_bytes(response).await, b"Invalid input");
}

#[tokio::test]
async fn repeated_requests_yield_identical_bodies() {
    let first = build_app()
        .oneshot(echo_request(
            "GET",
            "/echo?input=stable",
            Some(DEFAULT_BEARER_VALUE),
        ))
        .await
        .unwrap();
    let second = build_app()
        .oneshot(echo_request(
            "GET",
            "/echo?input=stable",
            Some(DEFAULT_BEARER_VALUE),
        ))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_bytes(first).await, body_bytes(second).await);
}

#[tokio::test]
async fn echo_route_is_method_agnostic() {
    for method in ["POST", "PUT", "DELETE", "HEAD"] {
        let response = build_app()
            .oneshot(echo_request(
                method,
                "/echo?input=hello",
                Some(DEFAULT_BEARER_VALUE),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "method {method}");
    }
}

#[tokio::test]
async fn echo_responses_are_marked_no_store() {
    let app = build_app();

    let response = app
        .oneshot(echo_request(
            "GET",
            "/echo?input=hello",
            Some(DEFAULT_BEARER_VALUE),
        ))
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("cache-control")
            .and_then(|v| v.to_str().ok()),
        Some("no-store")
    );
}

#[tokio::test]
async fn echo_body_parses_as_json_with_message_field() {
    let app = build_app();

    let response = app
        .oneshot(echo_request(
            "GET",
            "/echo?input=hello",
            Some(DEFAULT_BEARER_VALUE),
        ))
        .await
        .unwrap();

    let body = body_bytes(response).await;
    let payload: serde_json::Value =
        serde_json::from_slice(&body).expect("expected json body");
    assert_eq!(payload["message"], "Echo: hello");
}

#[tokio::test]
async fn health_probe_needs_no_credentials() {
    let app = build_app();

    let response = app
        .oneshot(echo_request("GET", "/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"ok");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = build_app();

    let response = app
        .oneshot(echo_request("GET", "/nope", Some(DEFAULT_BEARER_VALUE)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
