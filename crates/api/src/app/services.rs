//! Shared application state: the catalog behind a lock.

use std::sync::RwLock;

use catalog_core::{Catalog, DomainResult, Product, ProductDraft};

/// Facade over the in-memory catalog, injected into handlers via
/// `Extension<Arc<AppServices>>`.
///
/// The lock makes each store operation atomic; there is no coordination
/// across requests beyond that.
pub struct AppServices {
    catalog: RwLock<Catalog>,
}

impl AppServices {
    /// Services over the standard seeded catalog (production wiring).
    pub fn seeded() -> Self {
        Self::with_catalog(Catalog::seeded())
    }

    /// Services over an arbitrary catalog (tests).
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    pub fn products_list(&self) -> Vec<Product> {
        self.catalog.read().unwrap().list().to_vec()
    }

    pub fn products_get(&self, id: u64) -> Option<Product> {
        self.catalog.read().unwrap().find(id).cloned()
    }

    pub fn products_create(&self, draft: ProductDraft) -> Product {
        let mut catalog = self.catalog.write().unwrap();
        let created = catalog.create(draft);
        tracing::info!(product_id = created.id, "product created");
        created
    }

    pub fn products_update(&self, id: u64, draft: ProductDraft) -> DomainResult<Product> {
        let mut catalog = self.catalog.write().unwrap();
        let updated = catalog.update(id, draft)?.clone();
        tracing::info!(product_id = id, "product updated");
        Ok(updated)
    }

    pub fn products_delete(&self, id: u64) -> DomainResult<()> {
        self.catalog.write().unwrap().remove(id)?;
        tracing::info!(product_id = id, "product deleted");
        Ok(())
    }

    pub fn products_search(&self, query: Option<&str>, min_price: Option<f64>) -> Vec<Product> {
        self.catalog.read().unwrap().search(query, min_price)
    }
}
