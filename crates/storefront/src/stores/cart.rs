//! The shopping cart store.
//!
//! Lines are keyed by product identity and kept in insertion order: the
//! last-added line is appended, and quantity changes never reorder the
//! display. Aggregates (`total`, `count`) are recomputed per call - with
//! synchronous, run-to-completion mutations there is no staleness window to
//! cache around.

use std::sync::Arc;

use indexmap::IndexMap;

use hearthwood_core::{Price, ProductId};

use crate::models::Product;

/// A (product, quantity) line item.
///
/// Invariant: `quantity >= 1`. A line whose quantity reaches zero is removed
/// from the cart, never stored.
#[derive(Debug, Clone)]
pub struct CartLine {
    /// Reference to the catalog-owned product.
    pub product: Arc<Product>,
    /// Units of the product in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// The line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// Derived cart aggregates, recomputed after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of `price * quantity` over all lines.
    pub total: Price,
    /// Sum of quantities (not the number of distinct products).
    pub count: u32,
}

/// The shopping cart: session-scoped, in-memory, insertion-ordered.
#[derive(Debug, Default)]
pub struct Cart {
    lines: IndexMap<ProductId, CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity grows by one,
    /// saturating at `u32::MAX`; otherwise a new line is appended after the
    /// existing lines. Repeated adds never duplicate lines.
    pub fn add_item(&mut self, product: Arc<Product>) {
        let id = product.id.clone();
        self.lines
            .entry(id)
            .and_modify(|line| line.quantity = line.quantity.saturating_add(1))
            .or_insert(CartLine {
                product,
                quantity: 1,
            });
        tracing::debug!(lines = self.lines.len(), count = self.count(), "Cart add");
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero removes the line entirely; any other value is set
    /// as-is (no upper bound). Unknown product IDs are a no-op, not an error.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
        } else if let Some(line) = self.lines.get_mut(id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line if present; no-op otherwise.
    pub fn remove_item(&mut self, id: &ProductId) {
        // shift_remove keeps the remaining lines in insertion order
        self.lines.shift_remove(id);
    }

    /// Empty all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price * quantity` over all lines, in whole currency units.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.values().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines, saturating at `u32::MAX` like the
    /// price arithmetic saturates.
    ///
    /// Distinct from [`len`](Self::len), which counts distinct products.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines
            .values()
            .fold(0_u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// The derived aggregates as one snapshot.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total: self.total(),
            count: self.count(),
        }
    }

    /// Lines in insertion order, for display.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Look up a line by product identity.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.get(id)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
