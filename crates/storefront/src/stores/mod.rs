//! Mutable session stores.
//!
//! Each store is an explicitly-owned state container created empty at
//! session start and injected into the UI layer - no ambient globals.
//! Mutations take `&mut self`, so the single-threaded, run-to-completion
//! ordering of the session model is enforced by the borrow checker.

pub mod cart;
pub mod wishlist;

pub use cart::{Cart, CartLine, CartSummary};
pub use wishlist::Wishlist;
