use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::error;

use crate::api::types::*;
use crate::error::PartdexError;
use crate::query;

use super::router::AppState;

/// Error wrapper for API handlers
pub enum ApiError {
    NotFound,
    Internal(String),
}

impl From<PartdexError> for ApiError {
    fn from(e: PartdexError) -> Self {
        match e {
            PartdexError::NotFound(_) => ApiError::NotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            ApiError::Internal(detail) => {
                // Log the detail, serve a generic message.
                error!("handler failed: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// List, search, sort, and paginate parts
pub async fn list_parts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let snapshot = state.store.current();
    Json(query::list(&snapshot, &params.into_query()))
}

/// Get a single part by serial number (case-insensitive)
pub async fn get_part(
    State(state): State<Arc<AppState>>,
    Path(serial): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.store.current();
    match snapshot.get(&serial) {
        Some(record) => Ok(Json(record.clone())),
        None => Err(ApiError::NotFound),
    }
}

/// Reload the source file on demand.
///
/// The reload error string is served as-is so an operator sees why the
/// swap did not happen; the previous data keeps serving either way.
pub async fn reload(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.reloader.reload().await {
        Ok(count) => (StatusCode::OK, Json(ReloadResponse::success(count))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ReloadResponse::failure(e.to_string())),
        ),
    }
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        parts: state.store.current().len(),
    })
}
