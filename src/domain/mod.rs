//! Domain layer: content kinds, field schemas, payload encoders, platform
//! routing and the click counter contract.
//!
//! # Architecture
//!
//! - [`content_kind`] - Closed set of payload kinds
//! - [`fields`] - Field map read by the encoders
//! - [`schema`] - Declared fields per kind
//! - [`encoders`] - One pure encoder per kind, selected through a registry
//! - [`platform`] - User agent classification and target resolution
//! - [`tracking`] - UTM passthrough for the tracking redirect
//! - [`entities`] - Click counter entries
//! - [`repositories`] - Storage traits implemented by the infrastructure layer
//!
//! Nothing in this layer performs I/O.

pub mod content_kind;
pub mod encoders;
pub mod entities;
pub mod fields;
pub mod platform;
pub mod repositories;
pub mod schema;
pub mod tracking;

pub use content_kind::ContentKind;
pub use fields::{FieldMap, FieldValue};
