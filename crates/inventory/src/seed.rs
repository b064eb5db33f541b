//! Seed data for a fresh inventory.
//!
//! The default grocery list is an ordinary value handed to
//! [`InventoryStore::with_seed`](crate::InventoryStore::with_seed); tests and
//! deployments can substitute their own list or a JSON seed file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use pantry_core::Money;

use crate::item::Item;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The documented 14-item grocery list.
pub fn default_seed() -> Vec<Item> {
    const DEFAULTS: [(&str, &str, u64, u64); 14] = [
        ("Apple", "Fruit", 50, 50),
        ("Bacon", "Meat", 25, 450),
        ("Banana", "Fruit", 100, 30),
        ("Bread", "Bakery", 30, 200),
        ("Carrots", "Produce", 60, 100),
        ("Chicken breast", "Meat", 50, 500),
        ("Coffee", "Beverage", 20, 800),
        ("Eggs", "Dairy", 40, 250),
        ("Ground Beef", "Meat", 40, 400),
        ("Lettuce", "Produce", 40, 150),
        ("Milk", "Dairy", 25, 300),
        ("Orange Juice", "Beverage", 30, 400),
        ("Peanut Butter", "Pantry", 25, 300),
        ("Rice", "Pantry", 100, 120),
    ];

    DEFAULTS
        .iter()
        .map(|&(name, category, quantity, cents)| {
            Item::new(name, category, quantity, Money::from_cents(cents))
        })
        .collect()
}

/// Load a seed from a JSON array of items.
///
/// ```json
/// [{"name": "Apple", "category": "Fruit", "quantity": 50, "unit_price": 0.50}]
/// ```
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<Item>, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<Item> = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), items = items.len(), "loaded inventory seed");
    Ok(items)
}
