//! Click counter backends.
//!
//! - [`InMemoryClickStore`] - Process-lifetime table, the default for a
//!   single-instance deployment

mod memory;

pub use memory::InMemoryClickStore;
