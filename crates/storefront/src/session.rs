//! The per-shopper session bundle.

use crate::services::auth::AuthStore;
use crate::stores::{Cart, Wishlist};

/// One shopper's mutable session state.
///
/// Explicitly owned and handed to the UI layer at session start - the three
/// stores are independent fields, so tests (and any future multi-session
/// host) can construct as many as they like. The catalog is shared
/// separately and never lives inside a session.
///
/// Note the stores have no lifecycle coupling: `auth.logout()` does not
/// clear the cart or wishlist, and there are no cross-store transactions -
/// callers sequence operations explicitly.
#[derive(Debug, Default)]
pub struct Session {
    /// The shopping cart.
    pub cart: Cart,
    /// The wishlist.
    pub wishlist: Wishlist,
    /// The authentication state and identity directory.
    pub auth: AuthStore,
}

impl Session {
    /// Create a fresh session: empty cart, empty wishlist, anonymous.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
