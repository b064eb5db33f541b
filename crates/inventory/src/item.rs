use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, DomainResult, Entity, Money, normalize_name};

/// A named, categorized stock record.
///
/// The name is the identity; two items whose names differ only by case are
/// the same item as far as an [`InventoryStore`](crate::InventoryStore) is
/// concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub quantity: u64,
    pub unit_price: Money,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u64,
        unit_price: Money,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            unit_price,
        }
    }

    /// `quantity × unit_price`.
    pub fn total_value(&self) -> DomainResult<Money> {
        self.unit_price.times(self.quantity)
    }

    pub(crate) fn ensure_valid(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

impl Entity for Item {
    type Key = String;

    fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_value_is_quantity_times_price() {
        let item = Item::new("Apple", "Fruit", 10, Money::from_cents(75));
        assert_eq!(item.total_value().unwrap(), Money::from_cents(750));

        let none = Item::new("Apple", "Fruit", 0, Money::from_cents(75));
        assert_eq!(none.total_value().unwrap(), Money::ZERO);
    }

    #[test]
    fn key_ignores_case() {
        let a = Item::new("Ground Beef", "Meat", 1, Money::ZERO);
        let b = Item::new("ground BEEF", "Other", 2, Money::ZERO);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn blank_name_is_invalid() {
        let item = Item::new("   ", "Fruit", 1, Money::ZERO);
        assert!(matches!(item.ensure_valid(), Err(DomainError::Validation(_))));
    }
}
