//! The wishlist store.
//!
//! Membership only - no quantities. Acts as a set keyed by product identity
//! with insertion order preserved for display.

use std::sync::Arc;

use indexmap::IndexMap;

use hearthwood_core::ProductId;

use crate::models::Product;

/// The wishlist: a session-scoped, insertion-ordered set of saved products.
#[derive(Debug, Default)]
pub struct Wishlist {
    entries: IndexMap<ProductId, Arc<Product>>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a product. If it is already saved this is a no-op: no duplicate
    /// entry, no reorder.
    pub fn add(&mut self, product: Arc<Product>) {
        self.entries.entry(product.id.clone()).or_insert(product);
    }

    /// Remove a saved product if present; no-op otherwise.
    pub fn remove(&mut self, id: &ProductId) {
        // shift_remove keeps the remaining entries in insertion order
        self.entries.shift_remove(id);
    }

    /// Whether a product is saved.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.entries.contains_key(id)
    }

    /// Saved products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Arc<Product>> {
        self.entries.values()
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all saved products.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hearthwood_core::{CategoryId, Price, SubcategoryId};

    fn product(id: &str) -> Arc<Product> {
        Arc::new(Product {
            id: ProductId::new(id),
            name: id.to_owned(),
            price: Price::new(100),
            original_price: None,
            discount: None,
            image: String::new(),
            category: CategoryId::new("living-room"),
            subcategory: SubcategoryId::new("sofas"),
            description: String::new(),
            in_stock: true,
            rating: 4.0,
            reviews: 0,
        })
    }

    #[test]
    fn test_double_add_keeps_size() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("sofa"));
        wishlist.add(product("sofa"));

        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(&ProductId::new("sofa")));
    }

    #[test]
    fn test_double_add_does_not_reorder() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("sofa"));
        wishlist.add(product("bed"));
        wishlist.add(product("sofa"));

        let order: Vec<_> = wishlist.products().map(|p| p.id.as_str()).collect();
        assert_eq!(order, ["sofa", "bed"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("sofa"));
        wishlist.remove(&ProductId::new("ghost"));

        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut wishlist = Wishlist::new();
        wishlist.add(product("sofa"));
        wishlist.add(product("bed"));
        wishlist.add(product("chair"));
        wishlist.remove(&ProductId::new("bed"));

        let order: Vec<_> = wishlist.products().map(|p| p.id.as_str()).collect();
        assert_eq!(order, ["sofa", "chair"]);
    }

    #[test]
    fn test_contains_and_clear() {
        let mut wishlist = Wishlist::new();
        assert!(!wishlist.contains(&ProductId::new("sofa")));

        wishlist.add(product("sofa"));
        assert!(wishlist.contains(&ProductId::new("sofa")));

        wishlist.clear();
        assert!(wishlist.is_empty());
    }
}
