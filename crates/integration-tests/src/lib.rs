//! Shared helpers for Hearthwood integration tests.
//!
//! The tests in `tests/` exercise the session engine against the real
//! catalog fixtures shipped in `data/catalog`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use hearthwood_storefront::Catalog;

/// Path to the repository's catalog fixtures.
#[must_use]
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/catalog")
}

/// Load the real catalog fixtures.
///
/// # Panics
///
/// Panics if the fixtures are missing or invalid - in a test context that is
/// the failure we want to see.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn load_catalog() -> Catalog {
    Catalog::load(&fixture_dir()).unwrap()
}
