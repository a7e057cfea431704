//! Infrastructure layer implementing the domain storage traits.
//!
//! # Modules
//!
//! - [`click_store`] - Click counter backends

pub mod click_store;
