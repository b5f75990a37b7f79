//! Router-level integration tests.
//!
//! These drive the full router (routing, extractors, error envelopes,
//! middleware) through `tower::ServiceExt::oneshot` without binding a
//! socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use string_analyzer::{build_router, sha256_hex, ServerConfig, ServerState};
use tower::ServiceExt;

fn test_app() -> Router {
    build_router(Arc::new(ServerState::new(ServerConfig::default())))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router never fails");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("valid JSON body")
    };
    (status, body)
}

fn post_string(value: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/strings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "value": value }).to_string()))
        .expect("valid request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

#[tokio::test]
async fn post_then_get_round_trips() {
    let app = test_app();

    let (status, body) = send(&app, post_string(&json!("racecar"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], sha256_hex("racecar"));

    let (status, body) = send(&app, get("/strings/racecar")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "racecar");
    assert_eq!(body["properties"]["is_palindrome"], true);
}

#[tokio::test]
async fn duplicate_post_is_conflict() {
    let app = test_app();

    let (status, _) = send(&app, post_string(&json!("hello"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, post_string(&json!("hello"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "ALREADY_EXISTS");
    assert_eq!(body["error"]["message"], "String already exists");
}

#[tokio::test]
async fn invalid_bodies_map_to_client_errors() {
    let app = test_app();

    // Missing value field
    let request = Request::builder()
        .method("POST")
        .uri("/strings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .expect("valid request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Missing or empty 'value' field");

    // Non-string value
    let (status, body) = send(&app, post_string(&json!(42))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    // Blank value
    let (status, _) = send(&app, post_string(&json!("   "))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn extractor_rejections_use_the_error_envelope() {
    let app = test_app();

    // Malformed JSON body
    let request = Request::builder()
        .method("POST")
        .uri("/strings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"value\": "))
        .expect("valid request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].is_string());

    // Missing JSON content type
    let request = Request::builder()
        .method("POST")
        .uri("/strings")
        .body(Body::from(json!({ "value": "racecar" }).to_string()))
        .expect("valid request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn natural_language_overflow_threshold_is_a_client_error() {
    let app = test_app();

    let uri = format!(
        "/strings/filter-by-natural-language?query=strings%20longer%20than%20{}",
        usize::MAX
    );
    let (status, body) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "UNPARSABLE_QUERY");
}

#[tokio::test]
async fn delete_returns_no_content_then_not_found() {
    let app = test_app();

    send(&app, post_string(&json!("ephemeral"))).await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/strings/ephemeral")
        .body(Body::empty())
        .expect("valid request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let request = Request::builder()
        .method("DELETE")
        .uri("/strings/ephemeral")
        .body(Body::empty())
        .expect("valid request");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["error"]["message"],
        "String does not exist in the system"
    );
}

#[tokio::test]
async fn listing_applies_query_filters() {
    let app = test_app();

    for value in ["racecar", "abba", "hello world"] {
        send(&app, post_string(&json!(value))).await;
    }

    let (status, body) = send(&app, get("/strings")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 3);

    let (status, body) = send(&app, get("/strings?is_palindrome=true")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let (status, body) = send(&app, get("/strings?is_palindrome=true&min_length=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["value"], "racecar");
}

#[tokio::test]
async fn listing_rejects_bad_query_parameters() {
    let app = test_app();

    let (status, body) = send(&app, get("/strings?sort_by=length")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Invalid query parameter 'sort_by'");

    let (status, body) = send(&app, get("/strings?min_length=9&max_length=3")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Invalid query parameter values or types"
    );

    let (status, _) = send(&app, get("/strings?contains_character=ab")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn natural_language_route_is_not_shadowed_by_value_lookup() {
    let app = test_app();

    for value in ["racecar", "hello world"] {
        send(&app, post_string(&json!(value))).await;
    }

    let (status, body) = send(
        &app,
        get("/strings/filter-by-natural-language?query=palindromic%20strings"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["value"], "racecar");
    assert_eq!(
        body["interpreted_query"]["parsed_filters"]["is_palindrome"],
        true
    );

    // Missing query parameter
    let (status, body) = send(&app, get("/strings/filter-by-natural-language")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "MISSING_QUERY");
}

#[tokio::test]
async fn unknown_routes_fall_back_to_404() {
    let app = test_app();

    let (status, body) = send(&app, get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn health_endpoints_are_public() {
    let app = test_app();

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["components"]["store"], "ready");

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "String Analyzer");
}

#[tokio::test]
async fn responses_carry_request_id_header() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(get("/health"))
        .await
        .expect("router never fails");
    assert!(response.headers().contains_key("x-request-id"));

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "test-correlation-id")
        .body(Body::empty())
        .expect("valid request");
    let response = app.clone().oneshot(request).await.expect("router never fails");
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "test-correlation-id"
    );
}
