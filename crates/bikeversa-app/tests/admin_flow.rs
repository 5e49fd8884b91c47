//! End-to-end flow over the in-process backend: create a brand,
//! create a bike referencing it, and read both back through the
//! brand-detail view with the name join applied.

use std::sync::Arc;

use bikeversa_app::admin::{BrandManager, CatalogManager};
use bikeversa_app::forms::SubmitOutcome;
use bikeversa_app::gallery::Gallery;
use bikeversa_app::views::{brand_name, BrandDetailView};
use bikeversa_core::constants::UNKNOWN_BRAND;
use bikeversa_store::{Bike, Brand, Collection, DocumentStore, MemoryStore};

#[tokio::test]
async fn brand_to_bike_to_detail_page() {
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());

    // Admin creates a brand.
    let mut brands = BrandManager::new(Arc::clone(&store));
    brands.open_create();
    {
        let draft = brands.form.draft_mut();
        draft.name = "Versa".into();
        draft.description = "Premium frames".into();
        draft.image_url = "versa.png".into();
    }
    assert_eq!(brands.submit().await, SubmitOutcome::Saved);
    let brand_id = brands.view.items()[0].id.clone();

    // Admin creates a bike under that brand.
    let mut catalog = CatalogManager::new(Arc::clone(&store));
    catalog.refresh().await;
    catalog.bikes.open_create();
    {
        let draft = catalog.bikes.form.draft_mut();
        draft.name = "Trail 9".into();
        draft.set_image(0, "front.png");
        draft.add_image_slot();
        draft.set_image(1, "side.png");
        draft.bike_type = "Mountain".into();
        draft.price = "$1,299".into();
        draft.set_description("<p>Fast on rough ground.</p>");
        draft.brand_id = brand_id.clone();
    }
    assert_eq!(catalog.bikes.submit().await, SubmitOutcome::Saved);
    assert_eq!(catalog.brand_name(&brand_id), "Versa");

    // The public brand-detail page sees the new bike with the join.
    let brand_collection: Collection<Brand> = Collection::new(Arc::clone(&store));
    let bike_collection: Collection<Bike> = Collection::new(Arc::clone(&store));
    let detail = BrandDetailView::load(&brand_collection, &bike_collection, &brand_id).await;

    let brand = detail.brand.expect("brand should resolve");
    assert_eq!(brand.name, "Versa");
    assert_eq!(detail.bikes.len(), 1);

    let bike = &detail.bikes[0];
    assert_eq!(bike.name, "Trail 9");
    assert_eq!(brand_name(std::slice::from_ref(&brand), &bike.brand_id), "Versa");
    assert!(bike.created_at.is_some());

    // Gallery starts on the first image and switches on demand.
    let mut gallery = Gallery::for_bike(bike);
    assert_eq!(gallery.active_image(), Some("front.png"));
    gallery.select(1);
    assert_eq!(gallery.active_image(), Some("side.png"));

    // A bike pointing at a deleted brand still renders, with the
    // sentinel label.
    assert!(brands.delete(&brand_id, true).await);
    catalog.refresh().await;
    assert_eq!(catalog.brand_name(&brand_id), UNKNOWN_BRAND);
    assert_eq!(catalog.bikes.view.items().len(), 1);
}
