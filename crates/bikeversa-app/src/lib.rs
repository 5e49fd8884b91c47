//! # bikeversa-app
//!
//! Client-side state layer of the Bike Versa site: list/detail view
//! models, entity form controllers, the media gallery, the hidden
//! admin-entry gesture, the contact-form relay, and the admin
//! dashboard glue. Rendering and routing live elsewhere; this crate
//! owns the state those layers display.

pub mod admin;
pub mod contact;
pub mod drafts;
pub mod forms;
pub mod gallery;
pub mod gesture;
pub mod views;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global tracing subscriber.
///
/// Honors `RUST_LOG`; otherwise app and store crates log at debug and
/// info respectively. Safe to call more than once (later calls are
/// no-ops).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bikeversa_app=debug,bikeversa_store=info,warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
