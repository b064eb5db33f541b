use serde::{Deserialize, Serialize};

use pantry_core::{DomainError, DomainResult, Money};
use pantry_inventory::InventoryStore;

/// Cart line: item, quantity, unit price at the time it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Canonical inventory spelling, not the spelling the caller typed.
    pub item_name: String,
    pub quantity: u64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Aggregate over all cart lines.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub total_quantity: u64,
    pub total_price: Money,
}

/// Ordered list of cart lines.
///
/// Lines for the same item may repeat; each `add_line` appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Price `quantity` of `item_name` from `inventory` and append the line.
    ///
    /// A line that would overflow the cart's total quantity or total price is
    /// rejected and the cart is left unchanged.
    pub fn add_line(
        &mut self,
        item_name: &str,
        quantity: i64,
        inventory: &InventoryStore,
    ) -> DomainResult<&CartLine> {
        let Some(item) = inventory.find_by_name(item_name) else {
            tracing::debug!(item_name, "cart: item not in inventory");
            return Err(DomainError::not_found(item_name));
        };

        if quantity <= 0 {
            return Err(DomainError::invalid_quantity("quantity must be positive"));
        }
        let quantity = quantity as u64;

        let line = CartLine {
            item_name: item.name.clone(),
            quantity,
            unit_price: item.unit_price,
            line_total: item.unit_price.times(quantity)?,
        };

        let totals = self.totals();
        if totals.total_quantity.checked_add(quantity).is_none() {
            return Err(DomainError::invalid_quantity("cart quantity out of range"));
        }
        if totals.total_price.checked_add(line.line_total).is_none() {
            return Err(DomainError::invalid_price("cart total out of range"));
        }

        tracing::debug!(
            item = %line.item_name,
            quantity,
            line_total = %line.line_total,
            "cart line added"
        );
        self.lines.push(line);
        Ok(&self.lines[self.lines.len() - 1])
    }

    pub fn clear(&mut self) {
        tracing::debug!(lines = self.lines.len(), "cart cleared");
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Recomputed from all lines on every call. `add_line` keeps both sums
    /// within range.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total_quantity: self.lines.iter().map(|l| l.quantity).sum(),
            total_price: self.lines.iter().map(|l| l.line_total).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_inventory::{Item, default_seed};

    fn inventory() -> InventoryStore {
        InventoryStore::with_seed(default_seed()).unwrap()
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let cart = Cart::new();
        assert_eq!(
            cart.totals(),
            CartTotals {
                total_quantity: 0,
                total_price: Money::ZERO
            }
        );
    }

    #[test]
    fn three_apples_cost_a_dollar_fifty() {
        let inv = inventory();
        let mut cart = Cart::new();

        let line = cart.add_line("Apple", 3, &inv).unwrap();
        assert_eq!(line.line_total, Money::from_cents(150));

        let totals = cart.totals();
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total_price, Money::from_cents(150));
    }

    #[test]
    fn unknown_item_is_not_found() {
        let inv = inventory();
        let mut cart = Cart::new();
        let err = cart.add_line("Kiwi", 1, &inv).unwrap_err();
        assert_eq!(err, DomainError::ItemNotFound("Kiwi".to_string()));
        assert!(cart.is_empty());
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let inv = inventory();
        let mut cart = Cart::new();
        for qty in [0, -2] {
            let err = cart.add_line("Apple", qty, &inv).unwrap_err();
            assert!(matches!(err, DomainError::InvalidQuantity(_)));
        }
        assert!(cart.is_empty());
    }

    #[test]
    fn unknown_item_wins_over_bad_quantity() {
        let inv = inventory();
        let mut cart = Cart::new();
        let err = cart.add_line("Kiwi", 0, &inv).unwrap_err();
        assert!(matches!(err, DomainError::ItemNotFound(_)));
    }

    #[test]
    fn lines_use_canonical_name_and_may_repeat() {
        let inv = inventory();
        let mut cart = Cart::new();
        cart.add_line("milk", 1, &inv).unwrap();
        cart.add_line("MILK", 2, &inv).unwrap();
        cart.add_line("Bread", 1, &inv).unwrap();

        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.lines()[0].item_name, "Milk");
        assert_eq!(cart.lines()[1].item_name, "Milk");

        let totals = cart.totals();
        assert_eq!(totals.total_quantity, 4);
        assert_eq!(totals.total_price, Money::from_cents(3 * 300 + 200));
    }

    #[test]
    fn adding_to_cart_does_not_touch_inventory() {
        let inv = inventory();
        let before = inv.find_by_name("Rice").cloned();
        let mut cart = Cart::new();
        cart.add_line("Rice", 500, &inv).unwrap();
        assert_eq!(inv.find_by_name("Rice").cloned(), before);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let inv = inventory();
        let mut cart = Cart::new();
        cart.clear();
        cart.add_line("Eggs", 2, &inv).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.totals(), CartTotals::default());
    }

    #[test]
    fn quantity_overflow_rejects_line_and_keeps_cart() {
        let inv = InventoryStore::with_seed(vec![Item::new("Sample", "Promo", 1, Money::ZERO)])
            .unwrap();
        let mut cart = Cart::new();
        cart.add_line("Sample", i64::MAX, &inv).unwrap();
        cart.add_line("Sample", i64::MAX, &inv).unwrap();

        let err = cart.add_line("Sample", i64::MAX, &inv).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuantity(_)));
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.totals().total_quantity, 2 * i64::MAX as u64);
        assert_eq!(cart.totals().total_price, Money::ZERO);
    }

    #[test]
    fn price_overflow_rejects_line_and_keeps_cart() {
        let inv = InventoryStore::with_seed(vec![Item::new(
            "Gold",
            "Luxury",
            1,
            Money::from_cents(u64::MAX / 2 + 1),
        )])
        .unwrap();
        let mut cart = Cart::new();
        cart.add_line("Gold", 1, &inv).unwrap();

        let err = cart.add_line("Gold", 1, &inv).unwrap_err();
        assert!(matches!(err, DomainError::InvalidPrice(_)));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.totals().total_price, Money::from_cents(u64::MAX / 2 + 1));
    }

    #[test]
    fn line_keeps_price_at_time_of_adding() {
        let mut inv = InventoryStore::with_seed(vec![Item::new(
            "Tea",
            "Beverage",
            5,
            Money::from_cents(500),
        )])
        .unwrap();
        let mut cart = Cart::new();
        cart.add_line("Tea", 1, &inv).unwrap();

        inv.update("Tea", 5, Money::from_cents(900)).unwrap();
        assert_eq!(cart.totals().total_price, Money::from_cents(500));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 300,
                ..ProptestConfig::default()
            })]

            /// Property: totals equal the sums over lines.
            #[test]
            fn totals_match_lines(picks in proptest::collection::vec((0usize..14, 1i64..20), 0..15)) {
                let inv = inventory();
                let mut cart = Cart::new();
                let mut qty = 0u64;
                let mut cents = 0u64;
                for (pick, q) in picks {
                    let item = &inv.list_all()[pick];
                    cart.add_line(&item.name, q, &inv).unwrap();
                    qty += q as u64;
                    cents += item.unit_price.cents() * q as u64;
                }
                let totals = cart.totals();
                prop_assert_eq!(totals.total_quantity, qty);
                prop_assert_eq!(totals.total_price, Money::from_cents(cents));
            }
        }
    }
}
