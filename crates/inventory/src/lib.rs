//! Inventory domain module.
//!
//! This crate contains business rules for the in-memory grocery inventory,
//! implemented purely as deterministic domain logic. The only IO is
//! [`seed::load_seed`], which reads an optional seed file at startup.

pub mod item;
pub mod seed;
pub mod store;

pub use item::Item;
pub use seed::{SeedError, default_seed, load_seed};
pub use store::InventoryStore;
