//! Type-safe price representation in whole currency units.
//!
//! Catalog prices are whole currency units (no fractional amounts), so a
//! `u64` wrapper is sufficient: negative prices are unrepresentable and cart
//! totals stay exact integer arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A price in whole currency units.
///
/// ## Examples
///
/// ```
/// use hearthwood_core::Price;
///
/// let unit = Price::new(24_999);
/// let line = unit * 3;
/// assert_eq!(line, Price::new(74_997));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero currency units.
    pub const ZERO: Self = Self(0);

    /// The largest representable price. Useful as an open upper bound.
    pub const MAX: Self = Self(u64::MAX);

    /// Create a price from whole currency units.
    #[must_use]
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Get the underlying amount in whole currency units.
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Saturating addition, so aggregate totals never wrap.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating multiplication by a quantity.
    #[must_use]
    pub const fn saturating_mul(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        self.saturating_mul(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl From<u64> for Price {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl From<Price> for u64 {
    fn from(price: Price) -> Self {
        price.0
    }
}
