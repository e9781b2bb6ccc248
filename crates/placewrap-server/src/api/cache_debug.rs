//! Debug passthrough to the cache store. Not part of the places surface;
//! useful for poking at entries during development.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;

use super::{ApiError, AppState};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct SetCacheEntry {
    value: String,
}

pub(super) async fn get_entry(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(key): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state.cache.get(&key).await {
        Ok(Some(bytes)) => Ok(Json(serde_json::json!({
            "key": key,
            "value": String::from_utf8_lossy(&bytes),
        }))),
        Ok(None) => Err(ApiError::new(req_id.0, "not_found", "key not found")),
        Err(error) => {
            tracing::warn!(key, %error, "cache debug read failed");
            Err(ApiError::new(req_id.0, "internal_error", "cache store unavailable"))
        }
    }
}

pub(super) async fn set_entry(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(key): Path<String>,
    Json(body): Json<SetCacheEntry>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match state
        .cache
        .set(&key, body.value.into_bytes(), state.cache_ttl)
        .await
    {
        Ok(()) => Ok(Json(serde_json::json!({ "message": format!("stored {key}") }))),
        Err(error) => {
            tracing::warn!(key, %error, "cache debug write failed");
            Err(ApiError::new(req_id.0, "internal_error", "cache store unavailable"))
        }
    }
}
