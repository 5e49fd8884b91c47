//! List/detail view models.
//!
//! A [`CollectionView`] owns the displayed state of one collection:
//! loading flag, fetched items, last fetch error, and the optional
//! selected item behind a modal. Fetches never panic the view; a
//! failure is logged, recorded in `error`, and the previous items
//! stay on screen.

use std::cmp::Ordering;

use tracing::error;

use bikeversa_core::constants::UNKNOWN_BRAND;
use bikeversa_store::{Bike, Brand, Collection, Entity, Result as StoreResult};

/// Handle for one in-flight fetch; stale completions are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

/// Displayed state of one collection.
#[derive(Debug)]
pub struct CollectionView<T: Entity> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    selected: Option<usize>,
    generation: u64,
}

impl<T: Entity> Default for CollectionView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> CollectionView<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            selected: None,
            generation: 0,
        }
    }

    /// Mark a fetch as started and get the token its completion must
    /// present. Starting a newer fetch invalidates older tokens, so a
    /// response that arrives after its view moved on is dropped.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        self.loading = true;
        LoadToken(self.generation)
    }

    /// Apply a fetch result, unless `token` has been superseded.
    pub fn finish_load(&mut self, token: LoadToken, result: StoreResult<Vec<T>>) {
        if token.0 != self.generation {
            return;
        }
        self.loading = false;

        match result {
            Ok(mut items) => {
                sort_by_created_desc(&mut items);
                self.items = items;
                self.error = None;
                if self
                    .selected
                    .is_some_and(|index| index >= self.items.len())
                {
                    self.selected = None;
                }
            }
            Err(e) => {
                error!(collection = T::COLLECTION, error = %e, "failed to fetch collection");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Fetch the whole collection and apply the result.
    pub async fn refresh(&mut self, collection: &Collection<T>) {
        let token = self.begin_load();
        let result = collection.list().await;
        self.finish_load(token, result);
    }

    /// Fetch the documents where `field == value` and apply the result.
    pub async fn refresh_where(&mut self, collection: &Collection<T>, field: &str, value: &str) {
        let token = self.begin_load();
        let result = collection.list_where(field, value).await;
        self.finish_load(token, result);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Last fetch failure, if the most recent fetch failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Open the modal/detail sub-view on the item at `index`.
    /// No-op out of bounds.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.and_then(|index| self.items.get(index))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// Order newest-first by creation stamp.
///
/// The comparator treats a pair as equal unless both documents carry
/// a stamp, so the stable sort keeps store-return order for ties and
/// for stamp-less legacy documents.
pub fn sort_by_created_desc<T: Entity>(items: &mut [T]) {
    items.sort_by(|a, b| match (a.created_at(), b.created_at()) {
        (Some(a), Some(b)) => b.cmp(&a),
        _ => Ordering::Equal,
    });
}

/// Resolve a bike's brand name against an in-memory brand list.
///
/// Dangling foreign keys are tolerated: an unmatched id renders the
/// sentinel label instead of failing.
pub fn brand_name<'a>(brands: &'a [Brand], brand_id: &str) -> &'a str {
    brands
        .iter()
        .find(|brand| brand.id == brand_id)
        .map(|brand| brand.name.as_str())
        .unwrap_or(UNKNOWN_BRAND)
}

/// State behind one brand's detail page: the brand itself plus its
/// bikes, fetched concurrently.
#[derive(Debug)]
pub struct BrandDetailView {
    /// The brand, or `None` when the id matched nothing.
    pub brand: Option<Brand>,
    /// Bikes joined to this brand, in storage order.
    pub bikes: Vec<Bike>,
}

impl BrandDetailView {
    /// Fetch the brand and its bikes. The two fetches race freely;
    /// either may fail without taking the other down.
    pub async fn load(
        brands: &Collection<Brand>,
        bikes: &Collection<Bike>,
        brand_id: &str,
    ) -> Self {
        let (brand_result, bikes_result) =
            tokio::join!(brands.get(brand_id), bikes.list_where("brandId", brand_id));

        let brand = match brand_result {
            Ok(brand) => Some(brand),
            Err(e) => {
                error!(brand_id, error = %e, "failed to fetch brand");
                None
            }
        };

        let bikes = match bikes_result {
            Ok(bikes) => bikes,
            Err(e) => {
                error!(brand_id, error = %e, "failed to fetch brand's bikes");
                Vec::new()
            }
        };

        Self { brand, bikes }
    }
}
