//! Shopping cart module.
//!
//! A cart prices selections against an inventory without mutating it.

pub mod cart;

pub use cart::{Cart, CartLine, CartTotals};
