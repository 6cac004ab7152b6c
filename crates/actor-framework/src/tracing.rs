//! # Observability & Tracing
//!
//! Every `ResourceActor` logs its lifecycle and each request with structured fields:
//!
//! - `entity_type`: short type name of the stored entity (`Product`, `Order`)
//! - `id`: the entity the request targets
//! - `size`: collection size after a create, delete, restore, or seed
//!
//! Clients add `#[tracing::instrument]` spans on the caller's side. Actors run on their own
//! tasks, so their events are not nested under those spans; the `id` field ties them up.
//!
//! ```text
//! INFO Actor started entity_type="Product" size=1
//! INFO Action ok entity_type="Product" id=k3v9x0q2a
//! INFO Created entity_type="Order" id=SSX4K2PQ size=1
//! ```
//!
//! Set `RUST_LOG` to choose the level (`info` when unset). At `debug` the full request
//! payloads are logged once per request.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// Call once, from the binary's `main`. Module paths are hidden because `entity_type`
/// already says which actor is speaking.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
