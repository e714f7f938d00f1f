//! Catalog domain types.
//!
//! Products and categories are static reference data owned by the
//! [`Catalog`](crate::catalog::Catalog). Session stores only ever hold
//! `Arc<Product>` references back into the catalog - a product is never
//! copied or mutated by the cart or wishlist.

use serde::{Deserialize, Serialize};

use hearthwood_core::{CategoryId, Price, ProductId, SubcategoryId};

/// A catalog product.
///
/// Immutable for the lifetime of the process. Invariants (enforced at
/// catalog load, not at construction):
///
/// - if `discount` is present, `original_price` must be present and greater
///   than `price`
/// - `discount` is a percentage in `0..=100`
/// - `rating` is in `0.0..=5.0`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier (slug).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price in whole currency units.
    pub price: Price,
    /// Pre-discount price, present only for discounted products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Discount percentage (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
    /// Product image URL.
    pub image: String,
    /// Owning category.
    pub category: CategoryId,
    /// Owning subcategory within the category.
    pub subcategory: SubcategoryId,
    /// Free-text description, searched by the query pipeline.
    pub description: String,
    /// Whether the product is currently in stock.
    pub in_stock: bool,
    /// Average review rating (0.0-5.0).
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
}

impl Product {
    /// The discount percentage, treating absent as zero.
    ///
    /// This is the value the `discount` sort key orders by.
    #[must_use]
    pub fn discount_or_zero(&self) -> u8 {
        self.discount.unwrap_or(0)
    }
}

/// A top-level catalog category with its ordered subcategories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier (slug).
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Ordered subcategory list, as rendered in navigation.
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Look up a subcategory by ID within this category.
    #[must_use]
    pub fn subcategory(&self, id: &SubcategoryId) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| &s.id == id)
    }
}

/// A subcategory within a [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    /// Unique subcategory identifier (slug).
    pub id: SubcategoryId,
    /// Display name.
    pub name: String,
    /// Optional icon name used by navigation chrome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
