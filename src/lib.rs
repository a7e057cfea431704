//! # qrlink
//!
//! Encodes form input into the text payloads embedded in QR codes, and
//! serves the redirect endpoints those payloads may point at.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Content kinds, field schemas, payload
//!   encoders, platform detection and UTM passthrough
//! - **Application Layer** ([`application`]) - Encoding pipeline and click
//!   tracking services
//! - **Infrastructure Layer** ([`infrastructure`]) - Click store backends
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Nineteen content kinds: links, messaging, Wi-Fi, vCard, iCalendar
//!   events, crypto payment URIs, map links and more
//! - ASCII sanitization of every field before encoding
//! - Tracking redirect with click counter and UTM passthrough
//! - Device-adaptive redirect for iOS, Android and desktop targets
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://qr.example.com"
//! cargo run
//!
//! # Encode from the command line
//! cargo run --bin qr-encode -- encode wifi ssid=Cafe password=latte
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AnalyticsService, EncodeOutcome, PayloadService};
    pub use crate::domain::entities::ClickCount;
    pub use crate::domain::repositories::ClickStore;
    pub use crate::domain::tracking::UtmParams;
    pub use crate::domain::{ContentKind, FieldMap, FieldValue};
    pub use crate::error::AppError;
    pub use crate::infrastructure::click_store::InMemoryClickStore;
    pub use crate::state::AppState;
}
