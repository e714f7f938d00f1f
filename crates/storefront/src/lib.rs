//! Hearthwood Storefront - the session state engine.
//!
//! This crate is the in-memory core behind the Hearthwood storefront UI:
//!
//! - [`catalog`] - the immutable product catalog, loaded once at startup
//! - [`query`] - the pure filter + sort pipeline over catalog products
//! - [`stores`] - mutable session state: the cart and the wishlist
//! - [`services::auth`] - the simulated authentication session
//! - [`session`] - the per-shopper bundle of mutable stores
//!
//! The UI layer is an external collaborator: it issues queries against the
//! catalog/pipeline and commands against the stores, then reads the derived
//! state (lines, totals, membership, identity) back synchronously. Nothing
//! here persists across a session and nothing is shared between sessions.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod services;
pub mod session;
pub mod stores;

pub use catalog::{Catalog, CatalogError};
pub use error::{Result, StorefrontError};
pub use session::Session;
