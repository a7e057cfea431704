//! Text helpers shared by the payload encoders.

pub mod escape;
pub mod sanitize;
