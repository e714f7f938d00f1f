//! The immutable product catalog.
//!
//! The catalog is loaded once at process start from JSON fixtures (or built
//! in memory for tests) and validated eagerly: duplicate identifiers,
//! orphaned category/subcategory references, and broken discount/rating
//! invariants all fail the load rather than surfacing later as rendering
//! glitches. After construction the catalog is read-only; session stores
//! hold `Arc<Product>` references into it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use hearthwood_core::{CategoryId, ProductId, SubcategoryId};

use crate::models::{Category, Product};

/// Maximum discount percentage.
const MAX_DISCOUNT: u8 = 100;

/// Maximum product rating.
const MAX_RATING: f32 = 5.0;

/// Errors raised while loading, validating, or querying the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A catalog file could not be read.
    #[error("failed to read {path}: {message}")]
    Io {
        /// Path of the offending file.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },

    /// A catalog file could not be parsed.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// Underlying parse error message.
        message: String,
    },

    /// Two products share an identifier.
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    /// Two categories share an identifier.
    #[error("duplicate category id: {0}")]
    DuplicateCategory(CategoryId),

    /// A product references a category that does not exist.
    #[error("product {product} references unknown category {category}")]
    UnknownCategory {
        /// The offending product.
        product: ProductId,
        /// The missing category.
        category: CategoryId,
    },

    /// A product references a subcategory missing from its category.
    #[error("product {product} references unknown subcategory {subcategory} in {category}")]
    UnknownSubcategory {
        /// The offending product.
        product: ProductId,
        /// The product's category.
        category: CategoryId,
        /// The missing subcategory.
        subcategory: SubcategoryId,
    },

    /// A product violates the discount/original-price invariant.
    #[error("product {product}: {message}")]
    InvalidProduct {
        /// The offending product.
        product: ProductId,
        /// What is wrong with it.
        message: String,
    },

    /// Product lookup miss. Recoverable; the UI renders a not-found view.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category lookup miss. Recoverable; the UI renders a not-found view.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),
}

/// The static product catalog and category taxonomy.
///
/// Cheaply cloneable: products and categories live behind `Arc`s shared by
/// every clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Arc<Product>>>,
    product_index: Arc<HashMap<ProductId, usize>>,
    categories: Arc<Vec<Category>>,
}

impl Catalog {
    /// Load the catalog from `categories.json` and `products.json` in `dir`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if either file cannot be read or parsed, or
    /// if validation fails (duplicate IDs, orphaned references, invariant
    /// violations).
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = read_json(&dir.join("categories.json"))?;
        let products: Vec<Product> = read_json(&dir.join("products.json"))?;

        let catalog = Self::from_parts(categories, products)?;
        tracing::info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from in-memory parts, running full validation.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] describing the first validation failure.
    pub fn from_parts(
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self, CatalogError> {
        let mut category_ids = HashMap::new();
        for (i, category) in categories.iter().enumerate() {
            if category_ids.insert(category.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut product_index = HashMap::with_capacity(products.len());
        for (i, product) in products.iter().enumerate() {
            if product_index.insert(product.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
            validate_product(product, &categories, &category_ids)?;
        }

        Ok(Self {
            products: Arc::new(products.into_iter().map(Arc::new).collect()),
            product_index: Arc::new(product_index),
            categories: Arc::new(categories),
        })
    }

    /// All products in catalog insertion order.
    #[must_use]
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// All categories with their subcategories, in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Fetch a product by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] on a lookup miss.
    pub fn product(&self, id: &ProductId) -> Result<Arc<Product>, CatalogError> {
        self.product_index
            .get(id)
            .and_then(|&i| self.products.get(i))
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))
    }

    /// Fetch a category by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::CategoryNotFound`] on a lookup miss.
    pub fn category(&self, id: &CategoryId) -> Result<&Category, CatalogError> {
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.clone()))
    }

    /// All products belonging to a category, in catalog insertion order.
    ///
    /// This is the pre-filtered collection category pages feed into the
    /// query pipeline.
    #[must_use]
    pub fn products_in_category(&self, id: &CategoryId) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| &p.category == id)
            .cloned()
            .collect()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Read and deserialize a JSON file.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Validate one product against the taxonomy and its own invariants.
fn validate_product(
    product: &Product,
    categories: &[Category],
    category_ids: &HashMap<CategoryId, usize>,
) -> Result<(), CatalogError> {
    let category = category_ids
        .get(&product.category)
        .and_then(|&i| categories.get(i))
        .ok_or_else(|| CatalogError::UnknownCategory {
            product: product.id.clone(),
            category: product.category.clone(),
        })?;

    if category.subcategory(&product.subcategory).is_none() {
        return Err(CatalogError::UnknownSubcategory {
            product: product.id.clone(),
            category: product.category.clone(),
            subcategory: product.subcategory.clone(),
        });
    }

    if let Some(discount) = product.discount {
        if discount > MAX_DISCOUNT {
            return Err(CatalogError::InvalidProduct {
                product: product.id.clone(),
                message: format!("discount {discount} exceeds {MAX_DISCOUNT}%"),
            });
        }
        match product.original_price {
            Some(original) if original > product.price => {}
            Some(original) => {
                return Err(CatalogError::InvalidProduct {
                    product: product.id.clone(),
                    message: format!(
                        "original price {original} must exceed price {}",
                        product.price
                    ),
                });
            }
            None => {
                return Err(CatalogError::InvalidProduct {
                    product: product.id.clone(),
                    message: "discount present without original price".to_owned(),
                });
            }
        }
    }

    if !(0.0..=MAX_RATING).contains(&product.rating) {
        return Err(CatalogError::InvalidProduct {
            product: product.id.clone(),
            message: format!("rating {} outside 0.0..=5.0", product.rating),
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::Subcategory;
    use hearthwood_core::Price;

    fn taxonomy() -> Vec<Category> {
        vec![Category {
            id: CategoryId::new("living-room"),
            name: "Living Room".to_owned(),
            subcategories: vec![
                Subcategory {
                    id: SubcategoryId::new("sofas"),
                    name: "Sofas".to_owned(),
                    icon: None,
                },
                Subcategory {
                    id: SubcategoryId::new("chairs"),
                    name: "Chairs".to_owned(),
                    icon: None,
                },
            ],
        }]
    }

    fn product(id: &str, subcategory: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_owned(),
            price: Price::new(1_000),
            original_price: None,
            discount: None,
            image: String::new(),
            category: CategoryId::new("living-room"),
            subcategory: SubcategoryId::new(subcategory),
            description: String::new(),
            in_stock: true,
            rating: 4.0,
            reviews: 10,
        }
    }

    #[test]
    fn test_from_parts_and_lookup() {
        let catalog =
            Catalog::from_parts(taxonomy(), vec![product("a", "sofas"), product("b", "chairs")])
                .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.product(&ProductId::new("a")).unwrap().id.as_str(),
            "a"
        );
        assert!(matches!(
            catalog.product(&ProductId::new("missing")),
            Err(CatalogError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_category_lookup_miss() {
        let catalog = Catalog::from_parts(taxonomy(), vec![]).unwrap();
        assert!(catalog.category(&CategoryId::new("living-room")).is_ok());
        assert!(matches!(
            catalog.category(&CategoryId::new("garage")),
            Err(CatalogError::CategoryNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_product_rejected() {
        let result =
            Catalog::from_parts(taxonomy(), vec![product("a", "sofas"), product("a", "chairs")]);
        assert!(matches!(result, Err(CatalogError::DuplicateProduct(_))));
    }

    #[test]
    fn test_orphaned_category_rejected() {
        let mut orphan = product("a", "sofas");
        orphan.category = CategoryId::new("garage");
        let result = Catalog::from_parts(taxonomy(), vec![orphan]);
        assert!(matches!(result, Err(CatalogError::UnknownCategory { .. })));
    }

    #[test]
    fn test_orphaned_subcategory_rejected() {
        let result = Catalog::from_parts(taxonomy(), vec![product("a", "beds")]);
        assert!(matches!(
            result,
            Err(CatalogError::UnknownSubcategory { .. })
        ));
    }

    #[test]
    fn test_discount_requires_original_price() {
        let mut bad = product("a", "sofas");
        bad.discount = Some(10);
        let result = Catalog::from_parts(taxonomy(), vec![bad]);
        assert!(matches!(result, Err(CatalogError::InvalidProduct { .. })));
    }

    #[test]
    fn test_original_price_must_exceed_price() {
        let mut bad = product("a", "sofas");
        bad.discount = Some(10);
        bad.original_price = Some(Price::new(500));
        let result = Catalog::from_parts(taxonomy(), vec![bad]);
        assert!(matches!(result, Err(CatalogError::InvalidProduct { .. })));
    }

    #[test]
    fn test_valid_discount_accepted() {
        let mut good = product("a", "sofas");
        good.discount = Some(10);
        good.original_price = Some(Price::new(1_200));
        assert!(Catalog::from_parts(taxonomy(), vec![good]).is_ok());
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut bad = product("a", "sofas");
        bad.rating = 5.5;
        let result = Catalog::from_parts(taxonomy(), vec![bad]);
        assert!(matches!(result, Err(CatalogError::InvalidProduct { .. })));
    }

    #[test]
    fn test_products_in_category_preserves_order() {
        let catalog =
            Catalog::from_parts(taxonomy(), vec![product("a", "sofas"), product("b", "chairs")])
                .unwrap();
        let ids: Vec<_> = catalog
            .products_in_category(&CategoryId::new("living-room"))
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(ids, vec![ProductId::new("a"), ProductId::new("b")]);
    }
}
