//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /redirect`      - Tracking redirect with UTM passthrough
//! - `POST /redirect`      - Click counter table
//! - `GET  /multiplatform` - Device-adaptive redirect
//! - `GET  /health`        - Health check
//! - `/api/*`              - JSON API for payload encoding
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    click_counts_handler, health_handler, multiplatform_handler, redirect_handler,
};
use crate::api::middleware::tracing;
use crate::domain::encoders::links::MULTIPLATFORM_PATH;
use crate::domain::tracking::REDIRECT_PATH;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route(
            REDIRECT_PATH,
            get(redirect_handler).post(click_counts_handler),
        )
        .route(MULTIPLATFORM_PATH, get(multiplatform_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
