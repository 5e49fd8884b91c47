//! Contact form submission through the third-party relay.
//!
//! One-shot POST of `{name, email, message}` to a fixed endpoint.
//! Any 2xx is success; every other outcome, transport failures
//! included, collapses into one generic user-facing error message.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use bikeversa_core::constants::{
    CONTACT_FAILURE_MESSAGE, CONTACT_RELAY_URL, CONTACT_SUCCESS_MESSAGE,
};

/// The JSON body posted to the relay.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Relay failure. Distinct variants for logging only; users see one
/// generic message either way.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Relay unreachable: {0}")]
    Transport(String),

    #[error("Relay rejected the message with status {0}")]
    Status(u16),
}

/// Seam over the form-relay endpoint.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// Relay client for the production endpoint.
pub struct HttpRelay {
    client: reqwest::Client,
    url: String,
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpRelay {
    pub fn new() -> Self {
        Self::with_url(CONTACT_RELAY_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl FormRelay for HttpRelay {
    async fn send(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.url)
            .json(message)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(RelayError::Status(response.status().as_u16()))
        }
    }
}

/// Outcome of the last submission, driving the banner under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Success,
    Failure,
}

/// State of the public contact form.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
    status: Option<SubmitStatus>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<SubmitStatus> {
        self.status
    }

    /// User-facing banner text for the last submission, if any.
    pub fn status_message(&self) -> Option<&'static str> {
        self.status.map(|status| match status {
            SubmitStatus::Success => CONTACT_SUCCESS_MESSAGE,
            SubmitStatus::Failure => CONTACT_FAILURE_MESSAGE,
        })
    }

    /// Post the form through `relay`.
    ///
    /// Success clears the fields; failure keeps them so the user can
    /// retry. A submit while one is already in flight is ignored.
    pub async fn submit(&mut self, relay: &dyn FormRelay) {
        if self.submitting {
            return;
        }
        self.submitting = true;
        self.status = None;

        let message = ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };

        match relay.send(&message).await {
            Ok(()) => {
                info!("contact message relayed");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = Some(SubmitStatus::Success);
            }
            Err(e) => {
                warn!(error = %e, "contact relay failed");
                self.status = Some(SubmitStatus::Failure);
            }
        }

        self.submitting = false;
    }
}
