//! Catalog browsing commands.
//!
//! # Usage
//!
//! ```bash
//! hw-cli catalog list --category living-room --subcategory sofas --sort price-low
//! hw-cli catalog search "oak table" --max-price 20000
//! hw-cli catalog show velvet-sofa
//! hw-cli categories
//! ```

use std::sync::Arc;

use hearthwood_core::{CategoryId, Price, SubcategoryId};
use hearthwood_storefront::models::Product;
use hearthwood_storefront::query::{self, ProductFilter, SortKey};
use hearthwood_storefront::{Catalog, StorefrontError};

/// List products, optionally restricted to a category/subcategory and
/// price range.
pub fn list(
    catalog: &Catalog,
    category: Option<&str>,
    subcategory: Option<&str>,
    min_price: Option<u64>,
    max_price: Option<u64>,
    sort: &str,
) -> Result<(), StorefrontError> {
    let sort: SortKey = sort.parse()?;

    let products = match category {
        Some(slug) => {
            let id = CategoryId::new(slug);
            // surface a proper not-found for bogus category slugs
            catalog.category(&id)?;
            catalog.products_in_category(&id)
        }
        None => catalog.products().to_vec(),
    };

    let filter = ProductFilter {
        subcategory: subcategory.map(SubcategoryId::new),
        price_min: min_price.map_or(Price::ZERO, Price::new),
        price_max: max_price.map_or(Price::MAX, Price::new),
        search_term: None,
    };

    print_products(&query::run(&products, &filter, sort));
    Ok(())
}

/// Search the whole catalog by free text.
pub fn search(
    catalog: &Catalog,
    term: &str,
    max_price: Option<u64>,
    sort: &str,
) -> Result<(), StorefrontError> {
    let sort: SortKey = sort.parse()?;

    let filter = ProductFilter {
        price_max: max_price.map_or(Price::MAX, Price::new),
        ..ProductFilter::search(term)
    };

    print_products(&query::run(catalog.products(), &filter, sort));
    Ok(())
}

/// Show one product in detail.
#[allow(clippy::print_stdout)]
pub fn show(catalog: &Catalog, id: &str) -> Result<(), StorefrontError> {
    let product = catalog.product(&id.into())?;

    println!("{} ({})", product.name, product.id);
    println!("  price:       {}", product.price);
    if let (Some(original), Some(discount)) = (product.original_price, product.discount) {
        println!("  was:         {original} (-{discount}%)");
    }
    println!("  category:    {} / {}", product.category, product.subcategory);
    println!("  rating:      {} ({} reviews)", product.rating, product.reviews);
    println!("  in stock:    {}", if product.in_stock { "yes" } else { "no" });
    println!("  {}", product.description);
    Ok(())
}

/// Print the category taxonomy.
#[allow(clippy::print_stdout)]
pub fn categories(catalog: &Catalog) {
    for category in catalog.categories() {
        println!("{} ({})", category.name, category.id);
        for subcategory in &category.subcategories {
            println!("  - {} ({})", subcategory.name, subcategory.id);
        }
    }
}

/// Print a product result table.
#[allow(clippy::print_stdout)]
fn print_products(products: &[Arc<Product>]) {
    if products.is_empty() {
        println!("No products found matching your criteria.");
        return;
    }

    println!("{:<24} {:>10} {:>7} {:>9}  NAME", "ID", "PRICE", "RATING", "DISCOUNT");
    for product in products {
        println!(
            "{:<24} {:>10} {:>7.1} {:>8}%  {}",
            product.id,
            product.price,
            product.rating,
            product.discount_or_zero(),
            product.name
        );
    }
    println!("({} products)", products.len());
}
