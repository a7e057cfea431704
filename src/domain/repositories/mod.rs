//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via
//! `mockall` for service tests.
//!
//! - [`ClickStore`] - Click counter table keyed by redirect target

pub mod click_store;

pub use click_store::ClickStore;

#[cfg(test)]
pub use click_store::MockClickStore;
