//! Opaque session value handed to the admin surface.
//!
//! Authentication itself is an external collaborator; the engine only
//! cares whether a session exists and who it belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signed-in administrator session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Provider-assigned user identifier.
    pub uid: String,
    /// Email address the user signed in with.
    pub email: String,
    /// When this session was established.
    pub signed_in_at: DateTime<Utc>,
}

impl Session {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            signed_in_at: Utc::now(),
        }
    }
}
