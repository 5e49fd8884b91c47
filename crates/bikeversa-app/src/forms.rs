//! Generic entity form controller.
//!
//! One [`EntityForm`] owns one [`Draft`]: the mutable, unpersisted
//! field set of a form session. Opening for create starts from the
//! draft's default; opening for edit seeds it from an existing
//! entity. Submit routes to `update` when the session carries an id
//! and `create` otherwise; a failed store call leaves the form open
//! with its values intact.

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use bikeversa_store::{Collection, Entity};

/// Client-side validation failure; never reaches the gateway.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// The transient field set of one form session.
pub trait Draft: Clone + Default + Serialize + Send + Sync + 'static {
    /// Entity this draft persists into.
    type Entity: Entity;

    /// Seed a draft from an existing entity (edit mode).
    fn from_entity(entity: &Self::Entity) -> Self;

    /// Required-field checks run before any gateway call.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Whether the form session targets a new or an existing document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Persisted; the form closed and the owning list should refresh.
    Saved,
    /// Failed client-side validation; form stays open.
    Rejected(ValidationError),
    /// The store call failed; form stays open with values intact.
    Failed,
    /// A submit was already in flight; this one was ignored.
    InFlight,
}

/// Controller for one entity's create/edit form.
#[derive(Debug, Clone)]
pub struct EntityForm<D: Draft> {
    mode: FormMode,
    draft: D,
    open: bool,
    submitting: bool,
    error: Option<String>,
}

impl<D: Draft> Default for EntityForm<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Draft> EntityForm<D> {
    /// A closed form with an empty draft.
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            draft: D::default(),
            open: false,
            submitting: false,
            error: None,
        }
    }

    /// Open with an empty draft for a new document.
    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.draft = D::default();
        self.open = true;
        self.error = None;
    }

    /// Open seeded from `entity` for editing.
    pub fn open_edit(&mut self, entity: &D::Entity) {
        self.mode = FormMode::Edit {
            id: entity.id().to_string(),
        };
        self.draft = D::from_entity(entity);
        self.open = true;
        self.error = None;
    }

    /// Discard the draft and close.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// Whether a submit is in flight (the UI disables the button).
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Last validation or store failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Field setters mutate the draft through this.
    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Validate and persist the draft.
    ///
    /// Edit sessions `update`, create sessions `create`. Success
    /// resets the controller to a closed empty form; the caller
    /// refreshes its list. Failure keeps the session as-is so the
    /// user can re-submit.
    pub async fn submit(&mut self, collection: &Collection<D::Entity>) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::InFlight;
        }

        if let Err(e) = self.draft.validate() {
            self.error = Some(e.to_string());
            return SubmitOutcome::Rejected(e);
        }

        self.submitting = true;
        let result = match &self.mode {
            FormMode::Edit { id } => collection.update(id, &self.draft).await.map(|()| None),
            FormMode::Create => collection.create(&self.draft).await.map(Some),
        };
        self.submitting = false;

        match result {
            Ok(id) => {
                if let Some(id) = id {
                    info!(collection = D::Entity::COLLECTION, id = %id, "document created");
                } else {
                    info!(collection = D::Entity::COLLECTION, "document updated");
                }
                *self = Self::new();
                SubmitOutcome::Saved
            }
            Err(e) => {
                error!(collection = D::Entity::COLLECTION, error = %e, "failed to save document");
                self.error = Some(e.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn force_submitting(&mut self) {
        self.submitting = true;
    }
}
