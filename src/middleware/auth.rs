use axum::{extract::{Request, State}, middleware::Next, response::Response};
use tracing::debug;

use crate::error::ApiError;
use crate::routes::AppState;

/// API-key gate for the `/api` routes. A denied request short-circuits
/// with 401 before any handler or store operation runs.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.api_key.verify(request.headers()) {
        debug!(path = %request.uri().path(), "rejected request with missing or invalid api key");
        return Err(ApiError::Unauthorized);
    }
    Ok(next.run(request).await)
}
