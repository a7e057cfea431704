//! Core domain entities.
//!
//! - [`ClickCount`] - Number of redirects observed for one tracked target

pub mod click;

pub use click::ClickCount;
