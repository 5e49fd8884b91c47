//! Admin back-office state.
//!
//! The admin surface is gated on an explicitly passed session value:
//! no session renders the login form, a session renders the
//! dashboard. Each dashboard tab is one [`Manager`]: the same generic
//! list+form controller for blogs, brands, and bikes instead of three
//! copies of the fetch/submit/delete glue.

use std::sync::Arc;

use tracing::{error, info};

use bikeversa_core::Session;
use bikeversa_store::{Brand, Collection, DocumentStore, Entity};

use crate::drafts::{BikeDraft, BlogDraft, BrandDraft};
use crate::forms::{Draft, EntityForm, SubmitOutcome};
use crate::views::{brand_name, CollectionView};

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManagerTab {
    #[default]
    Blogs,
    Brands,
    Bikes,
}

/// Entry state of the admin route.
#[derive(Debug)]
pub enum AdminPanel {
    /// No session: render the login form.
    LoginRequired,
    /// Signed in: render the dashboard.
    Dashboard { session: Session, tab: ManagerTab },
}

impl AdminPanel {
    pub fn new(session: Option<Session>) -> Self {
        match session {
            Some(session) => Self::Dashboard {
                session,
                tab: ManagerTab::default(),
            },
            None => Self::LoginRequired,
        }
    }

    /// Switch tabs; no-op on the login screen.
    pub fn select_tab(&mut self, next: ManagerTab) {
        if let Self::Dashboard { tab, .. } = self {
            *tab = next;
        }
    }

    /// Drop the session and fall back to the login form. The session
    /// provider's own logout is the caller's job; this only updates
    /// the panel state.
    pub fn sign_out(&mut self) {
        *self = Self::LoginRequired;
    }
}

/// List + form controller for one managed entity type.
pub struct Manager<D: Draft> {
    collection: Collection<D::Entity>,
    pub view: CollectionView<D::Entity>,
    pub form: EntityForm<D>,
}

impl<D: Draft> Manager<D> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            collection: Collection::new(store),
            view: CollectionView::new(),
            form: EntityForm::new(),
        }
    }

    pub fn collection(&self) -> &Collection<D::Entity> {
        &self.collection
    }

    /// Re-fetch the managed list.
    pub async fn refresh(&mut self) {
        self.view.refresh(&self.collection).await;
    }

    /// Open the form for a new document.
    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Open the form seeded from the listed item at `index`.
    /// No-op out of bounds.
    pub fn open_edit(&mut self, index: usize) {
        if let Some(entity) = self.view.items().get(index) {
            self.form.open_edit(entity);
        }
    }

    /// Submit the open form; a successful save re-fetches the list.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit(&self.collection).await;
        if outcome == SubmitOutcome::Saved {
            self.refresh().await;
        }
        outcome
    }

    /// Delete a document after explicit user confirmation.
    ///
    /// Without `confirmed` this is a no-op; there is no undo.
    /// Returns whether a document was deleted.
    pub async fn delete(&mut self, id: &str, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }

        match self.collection.delete(id).await {
            Ok(()) => {
                info!(collection = D::Entity::COLLECTION, id, "document deleted");
                self.refresh().await;
                true
            }
            Err(e) => {
                error!(collection = D::Entity::COLLECTION, id, error = %e, "failed to delete document");
                false
            }
        }
    }
}

/// The bikes tab: bike manager plus the brand list it joins against
/// (brand names on cards, brand options in the form's select).
pub struct CatalogManager {
    pub bikes: Manager<BikeDraft>,
    pub brands: CollectionView<Brand>,
    brands_collection: Collection<Brand>,
}

impl CatalogManager {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            bikes: Manager::new(Arc::clone(&store)),
            brands: CollectionView::new(),
            brands_collection: Collection::new(store),
        }
    }

    /// Fetch bikes and brands concurrently. Either may fail on its
    /// own; cards render the sentinel brand label until both resolve.
    pub async fn refresh(&mut self) {
        let Self {
            bikes,
            brands,
            brands_collection,
        } = self;
        tokio::join!(bikes.refresh(), brands.refresh(brands_collection));
    }

    /// Brand name for a bike card; sentinel when the key dangles.
    pub fn brand_name(&self, brand_id: &str) -> &str {
        brand_name(self.brands.items(), brand_id)
    }

    /// `(id, name)` options for the form's brand select.
    pub fn brand_options(&self) -> Vec<(&str, &str)> {
        self.brands
            .items()
            .iter()
            .map(|brand| (brand.id.as_str(), brand.name.as_str()))
            .collect()
    }
}

/// Convenience aliases for the three dashboard tabs.
pub type BlogManager = Manager<BlogDraft>;
pub type BrandManager = Manager<BrandDraft>;
pub type BikeManager = Manager<BikeDraft>;
