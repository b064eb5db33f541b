use std::collections::HashMap;

use pantry_core::{DomainError, DomainResult, Entity, Money, normalize_name};

use crate::item::Item;

/// In-memory inventory for one session.
///
/// Items keep insertion order; `index` maps each normalized name to the
/// item's position so name lookups do not scan.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an explicit seed, in order.
    pub fn with_seed(seed: impl IntoIterator<Item = Item>) -> DomainResult<Self> {
        let mut store = Self::new();
        for item in seed {
            store.add(item)?;
        }
        Ok(store)
    }

    /// Append `item`. Fails without mutation if the name is already taken.
    pub fn add(&mut self, item: Item) -> DomainResult<()> {
        item.ensure_valid()?;

        let key = item.key();
        if self.index.contains_key(&key) {
            tracing::debug!(name = %item.name, "rejecting duplicate item");
            return Err(DomainError::duplicate(item.name));
        }

        tracing::debug!(name = %item.name, category = %item.category, "item added");
        self.index.insert(key, self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Remove the item called `name`, returning it.
    pub fn remove(&mut self, name: &str) -> DomainResult<Item> {
        let Some(pos) = self.index.remove(&normalize_name(name)) else {
            tracing::debug!(name, "remove: item not found");
            return Err(DomainError::not_found(name));
        };

        let item = self.items.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }

        tracing::debug!(name = %item.name, "item removed");
        Ok(item)
    }

    /// Overwrite quantity and price of `name`; name and category stay.
    /// Returns the updated item.
    pub fn update(&mut self, name: &str, quantity: u64, unit_price: Money) -> DomainResult<&Item> {
        let Some(&pos) = self.index.get(&normalize_name(name)) else {
            tracing::debug!(name, "update: item not found");
            return Err(DomainError::not_found(name));
        };

        let item = &mut self.items[pos];
        item.quantity = quantity;
        item.unit_price = unit_price;

        tracing::debug!(name = %item.name, quantity, unit_price = %unit_price, "item updated");
        Ok(item)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.index
            .get(&normalize_name(name))
            .map(|&pos| &self.items[pos])
    }

    /// All items matching `name` (at most one, since names are unique).
    pub fn search_by_name(&self, name: &str) -> Vec<&Item> {
        self.find_by_name(name).into_iter().collect()
    }

    /// Items whose category matches case-insensitively, in insertion order.
    pub fn search_by_category(&self, category: &str) -> Vec<&Item> {
        let wanted = normalize_name(category);
        self.items
            .iter()
            .filter(|item| normalize_name(&item.category) == wanted)
            .collect()
    }

    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's `total_value`.
    pub fn total_value(&self) -> DomainResult<Money> {
        self.items
            .iter()
            .map(Item::total_value)
            .sum::<DomainResult<Money>>()
    }
}
