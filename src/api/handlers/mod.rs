//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod encode;
pub mod health;
pub mod kinds;
pub mod multiplatform;
pub mod redirect;

pub use encode::encode_handler;
pub use health::health_handler;
pub use kinds::kinds_handler;
pub use multiplatform::multiplatform_handler;
pub use redirect::{click_counts_handler, redirect_handler};
