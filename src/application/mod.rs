//! Application layer services.
//!
//! Services orchestrate the domain: they validate input, run the encoder
//! pipeline and talk to storage traits, giving HTTP handlers a small API.
//!
//! # Available Services
//!
//! - [`services::payload_service::PayloadService`] - Sanitize, encode and optionally wrap payloads
//! - [`services::analytics_service::AnalyticsService`] - Tracking redirects and click counts

pub mod services;
