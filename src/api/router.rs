use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::reload::Reloader;
use crate::store::Store;

use super::handlers::*;

/// Application state shared across all handlers
pub struct AppState {
    pub store: Arc<Store>,
    pub reloader: Arc<Reloader>,
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Catalog queries
        .route("/parts", get(list_parts))
        .route("/parts/:serial", get(get_part))
        // Dataset management
        .route("/reload", post(reload))
        // Health
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
