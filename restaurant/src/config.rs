//! Application configuration
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults (`owner` / `pass123`, menu 1, `info` logging)
//! 2. A `.env` file (the default lookup, or an explicit path)
//! 3. Process environment variables
//! 4. Command-line flags, applied by the caller through [`AppConfig::with_overrides`]
//!
//! ## Recognised keys
//! - `RESTAURANT_OWNER_USERNAME`
//! - `RESTAURANT_OWNER_PASSWORD`
//! - `RESTAURANT_INITIAL_CATALOG` (1, 2 or 3)
//! - `RESTAURANT_LOG_LEVEL`

use std::collections::HashMap;
use std::path::Path;

use shared::CatalogId;
use shared::logging::DEFAULT_LOG_LEVEL;

use crate::core::OwnerCredentials;
use crate::error::{RestaurantError, RestaurantResult};

pub const OWNER_USERNAME_KEY: &str = "RESTAURANT_OWNER_USERNAME";
pub const OWNER_PASSWORD_KEY: &str = "RESTAURANT_OWNER_PASSWORD";
pub const INITIAL_CATALOG_KEY: &str = "RESTAURANT_INITIAL_CATALOG";
pub const LOG_LEVEL_KEY: &str = "RESTAURANT_LOG_LEVEL";

const KEYS: &[&str] = &[OWNER_USERNAME_KEY, OWNER_PASSWORD_KEY, INITIAL_CATALOG_KEY, LOG_LEVEL_KEY];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub owner: OwnerCredentials,
    pub initial_catalog: CatalogId,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            owner: OwnerCredentials::default(),
            initial_catalog: CatalogId::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from a `.env` file and the process environment
    ///
    /// Without `env_file` a `.env` in the current or a parent directory is
    /// used if present. An explicit file that cannot be read is an error.
    pub fn load(env_file: Option<&Path>) -> RestaurantResult<Self> {
        let mut values = HashMap::new();

        match env_file {
            Some(path) => {
                let entries = dotenv::from_path_iter(path)
                    .map_err(|e| RestaurantError::config(format!("{}: {e}", path.display())))?;
                for entry in entries {
                    let (key, value) =
                        entry.map_err(|e| RestaurantError::config(format!("{}: {e}", path.display())))?;
                    values.insert(key, value);
                }
            }
            None => {
                // A missing default .env is fine
                if let Ok(entries) = dotenv::dotenv_iter() {
                    values.extend(entries.flatten());
                }
            }
        }

        for &key in KEYS {
            if let Ok(value) = std::env::var(key) {
                values.insert(key.to_string(), value);
            }
        }

        Self::from_values(&values)
    }

    /// Build from already collected key/value pairs
    pub fn from_values(values: &HashMap<String, String>) -> RestaurantResult<Self> {
        let mut config = Self::default();

        if let Some(username) = values.get(OWNER_USERNAME_KEY) {
            config.owner.username = username.clone();
        }
        if let Some(password) = values.get(OWNER_PASSWORD_KEY) {
            config.owner.password = password.clone();
        }
        if let Some(catalog) = values.get(INITIAL_CATALOG_KEY) {
            config.initial_catalog = catalog
                .parse()
                .map_err(|e| RestaurantError::config(format!("{INITIAL_CATALOG_KEY}: {e}")))?;
        }
        if let Some(level) = values.get(LOG_LEVEL_KEY) {
            config.log_level = level.clone();
        }

        if config.owner.username.trim().is_empty() || config.owner.password.trim().is_empty() {
            return Err(RestaurantError::config("owner credentials cannot be blank"));
        }

        Ok(config)
    }

    /// Apply command-line flags on top of the loaded values
    pub fn with_overrides(mut self, catalog: Option<CatalogId>, log_level: Option<String>) -> Self {
        if let Some(catalog) = catalog {
            self.initial_catalog = catalog;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}
