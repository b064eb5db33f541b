//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable and reported to the immediate caller. Parse
/// failures at the input boundary reuse `InvalidQuantity` / `InvalidPrice`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No item with the given name (case-insensitive).
    #[error("item '{0}' not found")]
    ItemNotFound(String),

    /// An item with the same case-insensitive name already exists.
    #[error("item '{0}' already exists")]
    DuplicateName(String),

    /// Quantity was non-numeric, negative, or otherwise out of range.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Price was non-numeric, negative, or otherwise out of range.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A value failed validation (e.g. empty name).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ItemNotFound(name.into())
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
