//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HEARTHWOOD_CATALOG_DIR` - Directory holding `categories.json` and
//!   `products.json` (default: `data/catalog`)

use std::path::PathBuf;

use thiserror::Error;

/// Default catalog fixture directory, relative to the working directory.
const DEFAULT_CATALOG_DIR: &str = "data/catalog";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be used.
    #[error("invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront core configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the catalog fixtures are loaded from.
    pub catalog_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `HEARTHWOOD_CATALOG_DIR` is
    /// set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let catalog_dir = match std::env::var("HEARTHWOOD_CATALOG_DIR") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "HEARTHWOOD_CATALOG_DIR".to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from(DEFAULT_CATALOG_DIR),
        };

        Ok(Self { catalog_dir })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from(DEFAULT_CATALOG_DIR),
        }
    }
}
