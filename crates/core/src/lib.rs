//! `pantry-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation).

pub mod entity;
pub mod error;
pub mod money;
pub mod value_object;

pub use entity::{Entity, normalize_name};
pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use value_object::ValueObject;
