//! Business logic services for the application layer.

pub mod analytics_service;
pub mod payload_service;

pub use analytics_service::AnalyticsService;
pub use payload_service::{EncodeOutcome, PayloadService};
