#![allow(dead_code)]

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use qrlink::api::handlers::{
    click_counts_handler, encode_handler, health_handler, kinds_handler, multiplatform_handler,
    redirect_handler,
};
use qrlink::application::services::{AnalyticsService, PayloadService};
use qrlink::domain::repositories::ClickStore;
use qrlink::infrastructure::click_store::InMemoryClickStore;
use qrlink::state::AppState;
use std::sync::Arc;
use url::Url;

pub const TEST_ORIGIN: &str = "https://qr.example.com";

pub fn create_test_state() -> AppState {
    let store: Arc<dyn ClickStore> = Arc::new(InMemoryClickStore::new());
    let base_url = Url::parse(TEST_ORIGIN).unwrap();

    AppState::new(
        Arc::new(PayloadService::new(TEST_ORIGIN)),
        Arc::new(AnalyticsService::new(store, base_url)),
    )
}

pub fn create_test_router(state: AppState) -> Router {
    Router::new()
        .route("/redirect", get(redirect_handler).post(click_counts_handler))
        .route("/multiplatform", get(multiplatform_handler))
        .route("/health", get(health_handler))
        .route("/api/encode", post(encode_handler))
        .route("/api/kinds", get(kinds_handler))
        .with_state(state)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_test_router(create_test_state())).unwrap()
}
