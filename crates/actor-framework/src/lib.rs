//! # Actor Framework
//!
//! Building blocks for stateful, single-owner resource stores on Tokio. Each kind of
//! resource (a product catalog, an order ledger) lives inside one [`ResourceActor`] task
//! that owns the whole collection and answers CRUD + Action requests one at a time.
//!
//! ## Why an actor per collection?
//!
//! - **No lost updates**: a read-modify-write on an entity (decrementing a stock cell,
//!   recomputing an order total) is handled start to finish before the next request is
//!   looked at. No locks, no compare-and-swap.
//! - **Snapshot persistence**: the owner of the collection is the only writer, so after each
//!   mutation it can rewrite the full collection to a [`BlobStore`] key.
//! - **Late-bound dependencies**: an actor that needs another actor (the ledger needs the
//!   catalog) receives that actor's client as its `Context` when it starts.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): the domain record and its hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]): message loop, ordering, ids, snapshots.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): typed async requests.
//! 4. **Persistence** ([`persistence`]): [`BlobStore`] plus memory and JSON-file stores.
//!
//! ## Testing
//!
//! The [`mock`] module scripts responses for a `ResourceClient` so an actor's dependencies
//! can be replaced in tests.
//!
//! Further reading: [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/).

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod persistence;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use persistence::{BlobStore, JsonFileStore, MemoryStore, StoreError};
