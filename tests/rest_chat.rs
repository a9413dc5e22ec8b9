// tests/rest_chat.rs
// Router-level tests for the chat endpoint. The completion provider is
// replaced with a local stub server (or an unroutable address for paths
// that must never reach the network).

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use gabble_backend::api::http::http_router;
use gabble_backend::llm::{CompletionClient, APOLOGY_REPLY};
use gabble_backend::state::AppState;

/// Unroutable base: any request that reaches the network fails fast with a
/// connection error, so tests can tell "rejected before I/O" apart from
/// "tried to call upstream".
const DEAD_UPSTREAM: &str = "http://127.0.0.1:9";

fn router_for(api_base: &str, api_key: Option<&str>) -> Router {
    let client = CompletionClient::new(
        api_base.to_string(),
        api_key.map(str::to_string),
        "sonar".to_string(),
        Duration::from_secs(2),
    );
    http_router(Arc::new(AppState::new(Arc::new(client))))
}

/// Spawns a stub completion endpoint answering every request with a fixed
/// status and body, and returns its base URL.
async fn spawn_upstream(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/chat/completions",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn post_chat(router: Router, payload: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = router_for(DEAD_UPSTREAM, Some("test-key"));
    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_empty_history_rejected_before_network() {
    let router = router_for(DEAD_UPSTREAM, Some("test-key"));
    let (status, body) = post_chat(router, json!({ "messages": [] })).await;

    // A 400 with an error field, not a fabricated greeting and not the 500
    // the dead upstream would have produced.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
    assert!(body.get("response").is_none());
}

#[tokio::test]
async fn test_all_assistant_history_rejected() {
    let router = router_for(DEAD_UPSTREAM, Some("test-key"));
    let (status, body) = post_chat(
        router,
        json!({ "messages": [{ "role": "assistant", "content": "hello?" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_missing_credential_is_a_server_error() {
    let router = router_for(DEAD_UPSTREAM, None);
    let (status, body) = post_chat(
        router,
        json!({ "messages": [{ "role": "user", "content": "hi" }] }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("not configured"));
}

#[tokio::test]
async fn test_successful_turn_returns_reply_text() {
    let upstream = spawn_upstream(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": "Hello there, Sam!" } }] }),
    )
    .await;
    let router = router_for(&upstream, Some("test-key"));

    let (status, body) = post_chat(
        router,
        json!({
            "messages": [{ "role": "user", "content": "Hi, I'm Sam" }],
            "personality": "casual",
            "language": "en-US",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Hello there, Sam!");
}

#[tokio::test]
async fn test_unknown_personality_and_language_fall_back_to_defaults() {
    let upstream = spawn_upstream(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "content": "ok" } }] }),
    )
    .await;
    let router = router_for(&upstream, Some("test-key"));

    let (status, body) = post_chat(
        router,
        json!({
            "messages": [{ "role": "user", "content": "hello" }],
            "personality": "sassy",
            "language": "xx-YY",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "ok");
}

#[tokio::test]
async fn test_rate_limit_propagates_as_429() {
    let upstream = spawn_upstream(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": "slow down" }),
    )
    .await;
    let router = router_for(&upstream, Some("test-key"));

    let (status, body) = post_chat(
        router,
        json!({ "messages": [{ "role": "user", "content": "hi" }] }),
    )
    .await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_upstream_failure_is_a_generic_server_error() {
    let upstream = spawn_upstream(
        StatusCode::BAD_GATEWAY,
        json!({ "error": "upstream exploded with secret details" }),
    )
    .await;
    let router = router_for(&upstream, Some("test-key"));

    let (status, body) = post_chat(
        router,
        json!({ "messages": [{ "role": "user", "content": "hi" }] }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(!message.contains("secret details"));
}

#[tokio::test]
async fn test_empty_upstream_response_substitutes_apology() {
    let upstream = spawn_upstream(StatusCode::OK, json!({ "choices": [] })).await;
    let router = router_for(&upstream, Some("test-key"));

    let (status, body) = post_chat(
        router,
        json!({ "messages": [{ "role": "user", "content": "hi" }] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], APOLOGY_REPLY);
}
