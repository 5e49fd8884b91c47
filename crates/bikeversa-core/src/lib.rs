//! # bikeversa-core
//!
//! Shared domain types and helpers for the Bike Versa content engine:
//! site-wide constants, rich-text length clamping, and the opaque
//! session value handed to the admin surface.

pub mod constants;
pub mod richtext;
pub mod session;

pub use session::Session;
