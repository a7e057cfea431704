//! JSON API route configuration.

use crate::api::handlers::{encode_handler, kinds_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /encode` - Encode form fields into a QR payload
/// - `GET  /kinds`  - List content kinds and their fields
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/encode", post(encode_handler))
        .route("/kinds", get(kinds_handler))
}
