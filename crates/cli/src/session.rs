//! One user session: exclusive owner of an inventory and a cart.

use pantry_cart::{Cart, CartLine, CartTotals};
use pantry_core::DomainResult;
use pantry_inventory::{InventoryStore, Item};

use crate::command::SessionCommand;

/// Result of executing a [`SessionCommand`]; plain data, no formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Items(Vec<Item>),
    Added(Item),
    Updated(Item),
    Removed(Item),
    /// Full cart snapshot, recomputed after every cart mutation.
    Cart {
        lines: Vec<CartLine>,
        totals: CartTotals,
    },
    Help,
    Quit,
}

#[derive(Debug, Default)]
pub struct Session {
    inventory: InventoryStore,
    cart: Cart,
}

impl Session {
    pub fn new(inventory: InventoryStore) -> Self {
        Self {
            inventory,
            cart: Cart::new(),
        }
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn execute(&mut self, command: SessionCommand) -> DomainResult<Outcome> {
        tracing::debug!(?command, "executing");

        match command {
            SessionCommand::List => Ok(Outcome::Items(self.inventory.list_all().to_vec())),
            SessionCommand::Find { name } => Ok(Outcome::Items(
                self.inventory
                    .search_by_name(&name)
                    .into_iter()
                    .cloned()
                    .collect(),
            )),
            SessionCommand::Category { category } => Ok(Outcome::Items(
                self.inventory
                    .search_by_category(&category)
                    .into_iter()
                    .cloned()
                    .collect(),
            )),
            SessionCommand::Add(item) => {
                self.inventory.add(item.clone())?;
                Ok(Outcome::Added(item))
            }
            SessionCommand::Update {
                name,
                quantity,
                unit_price,
            } => {
                let item = self.inventory.update(&name, quantity, unit_price)?;
                Ok(Outcome::Updated(item.clone()))
            }
            SessionCommand::Remove { name } => Ok(Outcome::Removed(self.inventory.remove(&name)?)),
            SessionCommand::CartAdd { name, quantity } => {
                self.cart.add_line(&name, quantity, &self.inventory)?;
                Ok(self.cart_snapshot())
            }
            SessionCommand::CartClear => {
                self.cart.clear();
                Ok(self.cart_snapshot())
            }
            SessionCommand::CartShow => Ok(self.cart_snapshot()),
            SessionCommand::Help => Ok(Outcome::Help),
            SessionCommand::Quit => Ok(Outcome::Quit),
        }
    }

    fn cart_snapshot(&self) -> Outcome {
        Outcome::Cart {
            lines: self.cart.lines().to_vec(),
            totals: self.cart.totals(),
        }
    }
}
