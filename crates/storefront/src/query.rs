//! The catalog query pipeline.
//!
//! A pure filter + sort over a product collection. Category pages feed in
//! [`Catalog::products_in_category`](crate::catalog::Catalog::products_in_category),
//! search feeds in the whole catalog; either way the pipeline never mutates
//! its input and an empty result is a valid outcome, not an error.
//!
//! Filters apply conjunctively. Sorting is stable, so products that compare
//! equal keep their catalog insertion order and repeated queries over the
//! same input are deterministic.

use std::str::FromStr;
use std::sync::Arc;

use hearthwood_core::{Price, SubcategoryId};

use crate::models::Product;

/// Filter parameters for a catalog query.
///
/// The default filter matches everything: open price range, no subcategory,
/// no search term.
#[derive(Debug, Clone)]
pub struct ProductFilter {
    /// Restrict to one subcategory. An ID unknown to the input collection
    /// simply matches nothing.
    pub subcategory: Option<SubcategoryId>,
    /// Inclusive lower price bound.
    pub price_min: Price,
    /// Inclusive upper price bound. A bound below `price_min` yields an
    /// empty result (no swap, no error).
    pub price_max: Price,
    /// Case-insensitive substring searched across name, description,
    /// category ID, and subcategory ID. Empty or whitespace-only terms
    /// bypass the text filter entirely.
    pub search_term: Option<String>,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            subcategory: None,
            price_min: Price::ZERO,
            price_max: Price::MAX,
            search_term: None,
        }
    }
}

impl ProductFilter {
    /// A filter that only applies a free-text search term.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    /// Whether a single product passes every filter.
    fn matches(&self, product: &Product) -> bool {
        if let Some(subcategory) = &self.subcategory {
            if &product.subcategory != subcategory {
                return false;
            }
        }

        if product.price < self.price_min || product.price > self.price_max {
            return false;
        }

        match self.search_term.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                product.name.to_lowercase().contains(&term)
                    || product.description.to_lowercase().contains(&term)
                    || product.category.as_str().to_lowercase().contains(&term)
                    || product.subcategory.as_str().to_lowercase().contains(&term)
            }
        }
    }
}

/// Sort order for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Search default: filtered results in catalog insertion order.
    #[default]
    Relevance,
    /// Listing default: filtered results in catalog insertion order.
    Newest,
    /// Ascending numeric price.
    PriceLowToHigh,
    /// Descending numeric price.
    PriceHighToLow,
    /// Descending rating; equal ratings keep catalog order.
    Rating,
    /// Descending discount percentage, absent discount sorting as zero.
    Discount,
    /// Ascending name, compared case-insensitively.
    ///
    /// Ordering is Unicode code-point order over lowercased names, not a
    /// locale-aware collation; accented names may sort after `z`.
    Name,
}

/// Error returned when parsing an unrecognized sort token.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "newest" => Ok(Self::Newest),
            "price-low" => Ok(Self::PriceLowToHigh),
            "price-high" => Ok(Self::PriceHighToLow),
            "rating" => Ok(Self::Rating),
            "discount" => Ok(Self::Discount),
            "name" => Ok(Self::Name),
            other => Err(ParseSortKeyError(other.to_owned())),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Self::Relevance => "relevance",
            Self::Newest => "newest",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Rating => "rating",
            Self::Discount => "discount",
            Self::Name => "name",
        };
        write!(f, "{token}")
    }
}

/// Run the query pipeline over a product collection.
///
/// Returns matching products in the order dictated by `sort`; ties and the
/// order-preserving sort keys fall back to the input (catalog insertion)
/// order. The input collection is never mutated.
#[must_use]
pub fn run(products: &[Arc<Product>], filter: &ProductFilter, sort: SortKey) -> Vec<Arc<Product>> {
    let mut results: Vec<Arc<Product>> = products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    // `sort_by` is stable, which is what keeps ties in catalog order.
    match sort {
        SortKey::Relevance | SortKey::Newest => {}
        SortKey::PriceLowToHigh => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHighToLow => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Discount => {
            results.sort_by(|a, b| b.discount_or_zero().cmp(&a.discount_or_zero()));
        }
        SortKey::Name => {
            results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }

    results
}
