#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use candor::config::CandorConfig;
use candor::generation::TextGenerator;
use candor::routes::{app_router, AppState};
use candor::store::UserStore;

/// Build a test app with the default (stub) generator. Returns the router
/// and a handle to the store for direct state assertions.
pub fn test_app() -> (Router, Arc<UserStore>) {
    let state = AppState::new(CandorConfig::default()).unwrap();
    let store = Arc::clone(&state.store);
    (app_router(state), store)
}

/// A generator that always fails, for exercising the 500 path.
pub struct FailingGenerator;

impl TextGenerator for FailingGenerator {
    fn generate(&self, _system_prompt: &str, _user_prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("provider unavailable")
    }
}

/// Build a test app whose generation provider always fails.
pub fn failing_app() -> (Router, Arc<UserStore>) {
    let state = AppState::with_generator(CandorConfig::default(), Arc::new(FailingGenerator));
    let store = Arc::clone(&state.store);
    (app_router(state), store)
}

/// Send a JSON request. Returns the status and the parsed body
/// (`Value::Null` when the body is not JSON, e.g. bare 500s).
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    dispatch(app, request).await
}

/// Send a body-less GET request.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Create a journal entry over HTTP, panicking unless it succeeds.
pub async fn create_entry(app: &Router, user_id: &str, text: &str) -> Value {
    let (status, body) = send_json(
        app,
        "POST",
        "/journal/entries",
        serde_json::json!({ "userId": user_id, "text": text }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "entry creation failed: {body}");
    body
}
