//! # Storefront
//!
//! The stateful core of a small apparel shop: a product catalog with per-size stock, an
//! order ledger, dashboard reporting and admin settings.
//!
//! - **[model]**: data types and their JSON shape.
//! - **[product_actor]** / **[order_actor]**: the catalog and the ledger, each a
//!   [`ResourceActor`](actor_framework::ResourceActor).
//! - **[clients]**: [`ProductClient`](clients::ProductClient) and
//!   [`OrderClient`](clients::OrderClient).
//! - **[reporting]**: dashboard figures.
//! - **[settings]**: admin credentials, hero image, footer links.
//! - **[lifecycle]**: [`StorefrontSystem`](lifecycle::StorefrontSystem), which restores,
//!   seeds, starts and stops everything.
//! - **[config]**: `STOREFRONT_*` environment settings.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod reporting;
pub mod settings;
