//! # Product Actor
//!
//! The catalog store: products with per-size stock, held by a
//! [`ResourceActor`](actor_framework::ResourceActor).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`query`] - category, search and featured views over a product list
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Stock policy
//!
//! The actor runs with a [`StockPolicy`](crate::model::StockPolicy) as its context.
//! `Floor` takes whatever is on hand when an order asks for more, `Strict` refuses.
//!
//! ```rust,ignore
//! let (actor, client) = product_actor::new(32);
//! tokio::spawn(actor.run(StockPolicy::Floor));
//!
//! let after = client.decrement_stock(id, Size::M, 2).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod query;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::{Product, ProductId};
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, ProductId::generate);
    (actor, ProductClient::new(generic_client))
}
