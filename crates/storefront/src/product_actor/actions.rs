//! Custom actions for the Product actor.
//!
//! These are the stock operations on a [`Product`](crate::model::Product) beyond plain
//! CRUD. They are handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).

use crate::model::{Product, Size};

#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads one stock cell without modifying it.
    CheckStock(Size),
    /// Takes `quantity` units out of the `size` cell.
    ///
    /// # Errors
    /// Under [`StockPolicy::Strict`](crate::model::StockPolicy::Strict) this fails when
    /// the cell holds fewer than `quantity` units.
    DecrementStock { size: Size, quantity: u32 },
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    /// Units currently in the cell.
    CheckStock(u32),
    /// The product as it stands after the decrement.
    DecrementStock(Box<Product>),
}
