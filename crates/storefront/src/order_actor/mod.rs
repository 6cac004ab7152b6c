//! # Order Actor
//!
//! The order ledger. Orders are placed against the catalog and then moved through their
//! statuses by the admin.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`lookup`] - order tracking by id or phone
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor needs the catalog to take stock when an order is placed, so it is started
//! with a [`ProductClient`](crate::clients::ProductClient) as its context:
//!
//! ```rust,ignore
//! let (product_actor, product_client) = product_actor::new(32);
//! let (order_actor, order_client) = order_actor::new(32);
//!
//! tokio::spawn(product_actor.run(StockPolicy::Floor));
//! tokio::spawn(order_actor.run(product_client.clone()));
//! ```

pub mod entity;
pub mod error;
pub mod lookup;

pub use error::*;
pub use lookup::find_by_id_or_phone;

use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, OrderId::generate);
    (actor, OrderClient::new(generic_client))
}
