use std::sync::Arc;

use axum::{extract::State, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::ApiKey;
use crate::handlers::posts;
use crate::middleware::require_api_key;
use crate::store::PostStore;

/// Shared request context: the injected store handle and the configured
/// API key. Holds no per-request or cross-request mutable state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub api_key: ApiKey,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>, api_key: ApiKey) -> Self {
        Self { store, api_key }
    }
}

pub fn app(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state.clone());

    let api = Router::new()
        .route("/api/posts", get(posts::list_posts).post(posts::create_post))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .with_state(state);

    public
        .merge(api)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "post-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "posts": "/api/posts (requires x-api-key)",
        }
    }))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok"
            })),
        ),
        Err(err) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "store_error": err.to_string()
            })),
        ),
    }
}
