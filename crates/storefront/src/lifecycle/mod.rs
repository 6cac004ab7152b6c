//! # System Lifecycle
//!
//! Starting, wiring and stopping the storefront.
//!
//! The catalog actor has no dependencies beyond its stock policy. The ledger actor gets a
//! clone of the catalog client as its context, so it can take stock while an order is
//! being created. Both restore their collections before they start:
//!
//! ```rust,ignore
//! let (mut product_actor, product_client) = product_actor::new(capacity);
//! let (mut order_actor, order_client) = order_actor::new(capacity);
//!
//! product_actor.restore(store.clone(), PRODUCTS_KEY)?;
//! order_actor.restore(store.clone(), ORDERS_KEY)?;
//!
//! tokio::spawn(product_actor.run(StockPolicy::Floor));
//! tokio::spawn(order_actor.run(product_client.clone()));
//! ```
//!
//! Shutdown runs in the opposite direction: the ledger stops first and releases its
//! catalog client, then the catalog stops.

mod storefront_system;

pub use storefront_system::*;
