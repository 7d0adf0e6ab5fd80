//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::ConvertService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub converter: Arc<ConvertService>,
}

impl axum::extract::FromRef<AppState> for Arc<ConvertService> {
    fn from_ref(state: &AppState) -> Self {
        state.converter.clone()
    }
}

/// Create application state from loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    let converter = Arc::new(ConvertService::from_config(&config));
    AppState {
        config: Arc::new(config),
        converter,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    // Data URLs inflate binary input by a third; the service enforces the
    // real limit after unwrapping and answers with a JSON 413.
    let body_limit = state.converter.max_upload_bytes().saturating_mul(2);

    Router::new()
        .route("/api/convert", post(api::handle_convert))
        .route("/api/palette", get(api::handle_palette))
        .route("/api/classify", get(api::handle_classify))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
