//! Domain types for the storefront.

pub mod product;
pub mod user;

pub use product::{Category, Product, Subcategory};
pub use user::{RegisterData, User};
