use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::error::ApiError;
use crate::routes::AppState;
use crate::store::{NewPost, Post};

/// Client-supplied fields for a new post. Both are required; anything
/// else in the body (including `published`) is ignored.
#[derive(Debug, Deserialize)]
struct CreatePost {
    title: String,
    content: String,
}

/// GET /api/posts - List all posts
pub async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    match state.store.list_posts().await {
        Ok(posts) => Ok(Json(posts)),
        Err(err) => {
            error!(kind = err.kind(), error = %err, "failed to fetch posts");
            Err(ApiError::FetchFailed)
        }
    }
}

/// POST /api/posts - Create one post, always published
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected create request: unreadable body");
        ApiError::CreateFailed
    })?;

    let fields: CreatePost = serde_json::from_value(body).map_err(|err| {
        warn!(error = %err, "rejected create request: missing or mistyped fields");
        ApiError::CreateFailed
    })?;

    let new_post = NewPost {
        title: fields.title,
        content: fields.content,
        published: true,
    };

    match state.store.create_post(new_post).await {
        Ok(created) => Ok(Json(created)),
        Err(err) => {
            error!(kind = err.kind(), error = %err, "failed to create post");
            Err(ApiError::CreateFailed)
        }
    }
}
