//! Unified error handling.
//!
//! Each module raises its own typed error; consumers that work across
//! modules (the CLI, a future web layer) use [`StorefrontError`], which all
//! of them convert into. No error here is fatal: every failure is local to
//! the triggering operation and leaves prior state intact.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog loading, validation, or lookup failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration loading failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed query input from the caller.
    #[error("invalid query: {0}")]
    Query(#[from] crate::query::ParseSortKeyError),
}

impl StorefrontError {
    /// Whether the error is a lookup miss the UI should render as a
    /// not-found view (rather than a failure message).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Catalog(CatalogError::ProductNotFound(_) | CatalogError::CategoryNotFound(_))
        )
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
