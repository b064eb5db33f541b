//! Text rendering of session outcomes.

use std::fmt::Write as _;

use pantry_cart::{CartLine, CartTotals};
use pantry_inventory::Item;

use crate::session::Outcome;

pub const HELP: &str = "\
commands:
  list                                   show every item
  find <name>                            look up one item
  category <category>                    items in a category
  add <name> | <category> | <qty> | <price>
  update <name> | <qty> | <price>
  remove <name>
  cart add <name> | <qty>                price a selection
  cart show                              current cart and totals
  cart clear | new order                 empty the cart
  help
  quit";

pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Items(items) if items.is_empty() => "no matching items".to_string(),
        Outcome::Items(items) => items_table(items),
        Outcome::Added(item) => format!("added {}", item.name),
        Outcome::Updated(item) => format!(
            "updated {}: qty {} @ {}",
            item.name, item.quantity, item.unit_price
        ),
        Outcome::Removed(item) => format!("removed {}", item.name),
        Outcome::Cart { lines, totals } => cart(lines, totals),
        Outcome::Help => HELP.to_string(),
        Outcome::Quit => "bye".to_string(),
    }
}

fn items_table(items: &[Item]) -> String {
    let width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = format!(
        "{:<width$}  {:<10}  {:>6}  {:>8}  {:>10}",
        "Name", "Category", "Qty", "Price", "Value"
    );
    for item in items {
        let value = item
            .total_value()
            .map(|v| v.to_string())
            .unwrap_or_else(|_| "overflow".to_string());
        let _ = write!(
            out,
            "\n{:<width$}  {:<10}  {:>6}  {:>8}  {:>10}",
            item.name,
            item.category,
            item.quantity,
            item.unit_price.to_string(),
            value
        );
    }
    out
}

fn cart(lines: &[CartLine], totals: &CartTotals) -> String {
    let mut out = String::new();
    for line in lines {
        let _ = writeln!(
            out,
            "{} - Qty: {} @ {} = {}",
            line.item_name, line.quantity, line.unit_price, line.line_total
        );
    }
    let _ = write!(
        out,
        "Total Items: {}\nTotal Price: {}",
        totals.total_quantity, totals.total_price
    );
    out
}
