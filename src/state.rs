//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, PayloadService};
use crate::domain::repositories::ClickStore;

/// Services shared across requests.
///
/// The click store is a trait object so deployments can swap the in-memory
/// table for another backend without touching handlers.
#[derive(Clone)]
pub struct AppState {
    pub payload_service: Arc<PayloadService>,
    pub analytics_service: Arc<AnalyticsService<dyn ClickStore>>,
}

impl AppState {
    pub fn new(
        payload_service: Arc<PayloadService>,
        analytics_service: Arc<AnalyticsService<dyn ClickStore>>,
    ) -> Self {
        Self {
            payload_service,
            analytics_service,
        }
    }
}
