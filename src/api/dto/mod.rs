//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod encode;
pub mod health;
pub mod kinds;
pub mod redirect;
