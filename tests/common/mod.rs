#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::Value;

use post_gateway::auth::ApiKey;
use post_gateway::routes::{app, AppState};
use post_gateway::store::MemoryPostStore;

pub const TEST_KEY: &str = "test-secret-key";

/// Build the full router wired to an in-memory store, returning the
/// store handle so tests can inspect and reconfigure it.
pub fn test_app() -> (Router, Arc<MemoryPostStore>) {
    let store = Arc::new(MemoryPostStore::new());
    let api_key = ApiKey::new(TEST_KEY).expect("test key");
    let state = AppState::new(store.clone(), api_key);
    (app(state), store)
}

pub fn get_posts(key: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/api/posts");
    if let Some(key) = key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(Body::empty()).expect("request")
}

pub fn post_posts(key: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/posts")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(key) = key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(Body::from(body.to_string())).expect("request")
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
