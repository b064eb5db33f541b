//! Process configuration from environment variables.

use std::path::PathBuf;

use anyhow::Context;

use pantry_inventory::{InventoryStore, default_seed, load_seed};

pub const SEED_PATH_VAR: &str = "PANTRY_SEED_PATH";
pub const LOG_VAR: &str = "PANTRY_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON seed file; the built-in grocery list when `None`.
    pub seed_path: Option<PathBuf>,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            log_filter: pantry_observability::tracing::DEFAULT_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            seed_path: non_empty(SEED_PATH_VAR).map(PathBuf::from),
            log_filter: non_empty(LOG_VAR).unwrap_or(defaults.log_filter),
        }
    }

    /// Build the session inventory from the configured seed.
    pub fn load_inventory(&self) -> anyhow::Result<InventoryStore> {
        let seed = match &self.seed_path {
            Some(path) => load_seed(path).context("failed to load inventory seed")?,
            None => {
                tracing::info!("{SEED_PATH_VAR} not set; using built-in grocery list");
                default_seed()
            }
        };
        InventoryStore::with_seed(seed).context("invalid inventory seed")
    }
}
