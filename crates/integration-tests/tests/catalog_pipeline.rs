//! Query pipeline tests against the real catalog fixtures.

#![allow(clippy::unwrap_used)]

use hearthwood_core::{CategoryId, Price, ProductId, SubcategoryId};
use hearthwood_storefront::CatalogError;
use hearthwood_storefront::query::{self, ProductFilter, SortKey};

use hearthwood_integration_tests::load_catalog;

#[test]
fn fixtures_load_and_validate() {
    let catalog = load_catalog();
    assert!(!catalog.is_empty());
    assert_eq!(catalog.categories().len(), 6);
}

#[test]
fn product_lookup_miss_is_not_found() {
    let catalog = load_catalog();
    let result = catalog.product(&ProductId::new("no-such-product"));
    assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
}

#[test]
fn category_page_flow() {
    let catalog = load_catalog();
    let living_room = CategoryId::new("living-room");

    // category lookup, then pre-filter, then the pipeline - the same
    // sequence a category page performs
    catalog.category(&living_room).unwrap();
    let products = catalog.products_in_category(&living_room);
    assert!(products.iter().all(|p| p.category == living_room));

    let sofas_only = ProductFilter {
        subcategory: Some(SubcategoryId::new("sofas")),
        ..ProductFilter::default()
    };
    let results = query::run(&products, &sofas_only, SortKey::Newest);
    assert!(!results.is_empty());
    assert!(results.iter().all(|p| p.subcategory.as_str() == "sofas"));
}

#[test]
fn price_sort_is_monotonic_over_fixtures() {
    let catalog = load_catalog();

    let ascending = query::run(catalog.products(), &ProductFilter::default(), SortKey::PriceLowToHigh);
    assert!(ascending.windows(2).all(|w| {
        let (a, b) = (w.first().unwrap(), w.get(1).unwrap());
        a.price <= b.price
    }));

    let descending = query::run(catalog.products(), &ProductFilter::default(), SortKey::PriceHighToLow);
    assert!(descending.windows(2).all(|w| {
        let (a, b) = (w.first().unwrap(), w.get(1).unwrap());
        a.price >= b.price
    }));
}

#[test]
fn search_spans_name_description_and_taxonomy() {
    let catalog = load_catalog();

    // "oak" appears in descriptions across the fixtures
    let by_description = query::run(
        catalog.products(),
        &ProductFilter::search("oak"),
        SortKey::Relevance,
    );
    assert!(!by_description.is_empty());

    // a category slug is searchable text too
    let by_category = query::run(
        catalog.products(),
        &ProductFilter::search("home-office"),
        SortKey::Relevance,
    );
    assert!(!by_category.is_empty());
    assert!(by_category.iter().all(|p| p.category.as_str() == "home-office"));
}

#[test]
fn search_results_keep_catalog_order_under_relevance() {
    let catalog = load_catalog();
    let results = query::run(
        catalog.products(),
        &ProductFilter::search("chair"),
        SortKey::Relevance,
    );

    let catalog_positions: Vec<usize> = results
        .iter()
        .map(|r| {
            catalog
                .products()
                .iter()
                .position(|p| p.id == r.id)
                .unwrap()
        })
        .collect();
    assert!(catalog_positions.windows(2).all(|w| w.first() < w.get(1)));
}

#[test]
fn inverted_price_range_yields_empty_over_fixtures() {
    let catalog = load_catalog();
    let inverted = ProductFilter {
        price_min: Price::new(50_000),
        price_max: Price::new(10_000),
        ..ProductFilter::default()
    };
    assert!(query::run(catalog.products(), &inverted, SortKey::Newest).is_empty());
}

#[test]
fn discount_sort_puts_undiscounted_last() {
    let catalog = load_catalog();
    let sorted = query::run(catalog.products(), &ProductFilter::default(), SortKey::Discount);

    let first_zero = sorted
        .iter()
        .position(|p| p.discount_or_zero() == 0)
        .unwrap();
    assert!(
        sorted
            .iter()
            .skip(first_zero)
            .all(|p| p.discount_or_zero() == 0)
    );
}
