//! # bikeversa-store
//!
//! Gateway to the remote document store backing the site. The store
//! is addressed as named collections of schema-flexible documents
//! keyed by opaque ids; this crate exposes the [`DocumentStore`]
//! trait over those collections, an in-process backend for tests and
//! local development, a reqwest-based REST backend, and a typed
//! [`Collection`] layer for the domain models.

pub mod collection;
pub mod document;
pub mod gateway;
pub mod http;
pub mod memory;
pub mod models;

mod error;

pub use collection::{Collection, Entity};
pub use document::{Fields, Filter, RawDocument};
pub use error::{Result, StoreError};
pub use gateway::DocumentStore;
pub use http::HttpStore;
pub use memory::MemoryStore;
pub use models::*;
