//! In-memory product catalog store.
//!
//! An ordered sequence of products mutated in place. All lookups are linear
//! scans; there are no secondary indices and no persistence.

use crate::error::{DomainError, DomainResult};
use crate::product::{Product, ProductDraft};

/// The in-memory catalog. Insertion order is preserved across all operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Product>,
}

impl Catalog {
    /// An empty catalog (used by tests that want isolated state).
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog every process starts with.
    pub fn seeded() -> Self {
        Self {
            items: vec![
                Product {
                    id: 1,
                    name: "laptop".to_string(),
                    price: 800.0,
                    description: None,
                },
                Product {
                    id: 2,
                    name: "mouse".to_string(),
                    price: 20.0,
                    description: None,
                },
                Product {
                    id: 3,
                    name: "monitor".to_string(),
                    price: 400.0,
                    description: None,
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Full current sequence, insertion order preserved.
    pub fn list(&self) -> &[Product] {
        &self.items
    }

    /// First record whose id matches, if any. O(n).
    pub fn find(&self, id: u64) -> Option<&Product> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Append a new record built from a validated draft.
    ///
    /// The new id is the current length + 1. After deletions that value can
    /// shrink back into the used range and collide with a surviving id; ids
    /// are unique at creation time only.
    pub fn create(&mut self, draft: ProductDraft) -> Product {
        let id = self.items.len() as u64 + 1;
        let product = draft.into_product(id);
        self.items.push(product.clone());
        product
    }

    /// Overwrite name, price and description of the record with the given id,
    /// keeping the id itself. Returns the updated record.
    pub fn update(&mut self, id: u64, draft: ProductDraft) -> DomainResult<&Product> {
        let product = self
            .items
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;

        product.name = draft.name().to_string();
        product.price = draft.price();
        product.description = draft.description().map(str::to_string);
        Ok(product)
    }

    /// Remove the first record with the given id.
    pub fn remove(&mut self, id: u64) -> DomainResult<()> {
        let pos = self
            .items
            .iter()
            .position(|p| p.id == id)
            .ok_or(DomainError::NotFound)?;
        self.items.remove(pos);
        Ok(())
    }

    /// Case-insensitive substring search on `name`, optionally narrowed to
    /// records with `price >= min_price`.
    ///
    /// Without a query the whole catalog is returned and `min_price` is
    /// ignored; that branch mirrors the listing endpoint.
    pub fn search(&self, query: Option<&str>, min_price: Option<f64>) -> Vec<Product> {
        let Some(query) = query.filter(|q| !q.is_empty()) else {
            return self.items.clone();
        };

        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .filter(|p| min_price.is_none_or(|min| p.price >= min))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft::new(name, price, None).unwrap()
    }

    #[test]
    fn seeded_catalog_lists_three_products_in_order() {
        let catalog = Catalog::seeded();
        let names: Vec<&str> = catalog.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["laptop", "mouse", "monitor"]);
        assert_eq!(catalog.list()[1].id, 2);
    }

    #[test]
    fn create_appends_with_next_id_and_preserves_order() {
        let mut catalog = Catalog::seeded();
        let created = catalog.create(draft("pen", 1.5));

        assert_eq!(created.id, 4);
        assert_eq!(created.name, "pen");
        assert_eq!(created.description, None);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.list().last(), Some(&created));
    }

    #[test]
    fn create_after_delete_reuses_an_id() {
        // Documented contract: next id is len + 1, so ids repeat once a
        // record has been removed.
        let mut catalog = Catalog::seeded();
        catalog.remove(2).unwrap();
        let created = catalog.create(draft("keyboard", 45.0));
        assert_eq!(created.id, 3);
        assert_eq!(catalog.list().iter().filter(|p| p.id == 3).count(), 2);
    }

    #[test]
    fn find_returns_matching_record() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.find(2).map(|p| p.name.as_str()), Some("mouse"));
        assert!(catalog.find(9999).is_none());
    }

    #[test]
    fn update_overwrites_fields_in_place() {
        let mut catalog = Catalog::seeded();
        let updated = catalog
            .update(2, ProductDraft::new("trackball", 35.0, Some("wired".into())).unwrap())
            .unwrap()
            .clone();

        assert_eq!(updated.id, 2);
        assert_eq!(updated.name, "trackball");
        assert_eq!(updated.description.as_deref(), Some("wired"));
        // In place: position in the sequence is unchanged.
        assert_eq!(catalog.list()[1], updated);
    }

    #[test]
    fn update_missing_id_leaves_catalog_unchanged() {
        let mut catalog = Catalog::seeded();
        let before = catalog.clone();
        let err = catalog.update(9999, draft("ghost", 1.0)).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
        assert_eq!(catalog, before);
    }

    #[test]
    fn update_is_idempotent_for_identical_payloads() {
        let mut catalog = Catalog::seeded();
        catalog.update(3, draft("screen", 410.0)).unwrap();
        let first = catalog.clone();
        catalog.update(3, draft("screen", 410.0)).unwrap();
        assert_eq!(catalog, first);
    }

    #[test]
    fn remove_deletes_exactly_one_record() {
        let mut catalog = Catalog::seeded();
        catalog.remove(2).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.find(2).is_none());
        // Repeating the delete is a not-found, both times.
        assert_eq!(catalog.remove(2).unwrap_err(), DomainError::NotFound);
        assert_eq!(catalog.remove(2).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn search_matches_substrings_case_insensitively() {
        let mut catalog = Catalog::seeded();
        catalog.create(ProductDraft::new("Mousepad", 150.0, None).unwrap());

        let names: Vec<String> = catalog
            .search(Some("MOUS"), None)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["mouse", "Mousepad"]);
    }

    #[test]
    fn search_min_price_narrows_matches() {
        let mut catalog = Catalog::seeded();
        catalog.create(ProductDraft::new("Mousepad", 150.0, None).unwrap());

        let names: Vec<String> = catalog
            .search(Some("mous"), Some(100.0))
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Mousepad"]);
    }

    #[test]
    fn search_without_query_returns_everything_and_ignores_min_price() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.search(None, Some(100.0)).len(), 3);
        assert_eq!(catalog.search(Some(""), Some(100.0)).len(), 3);
    }
}
