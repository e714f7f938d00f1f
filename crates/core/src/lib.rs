//! Hearthwood Core - Shared types library.
//!
//! This crate provides common types used across all Hearthwood components:
//! - `storefront` - The session engine (catalog, query pipeline, stores)
//! - `cli` - Command-line tools for browsing the catalog and demoing sessions
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no catalog data, no store
//! logic. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
