//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Inventory records carry no surrogate id; their identity is a key derived
/// from a natural attribute (the item name).
pub trait Entity {
    /// Identity key (already normalized for comparison).
    type Key: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identity key.
    fn key(&self) -> Self::Key;
}

/// Normalize a name for case-insensitive identity comparison.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}
