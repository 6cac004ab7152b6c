//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored record (Product, Order, ...) implements
//! so that a generic `ResourceActor` can own a collection of them. It names the associated
//! types for IDs, create/update payloads, custom actions, injected context, and errors, and
//! provides the lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.
//!
//! # Persistence
//! Entities are `Serialize + DeserializeOwned` so an actor can write its whole collection
//! to a [`BlobStore`](crate::persistence::BlobStore) after every mutation and restore it
//! on startup.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `async` so an entity can call other actors while it is being created or
/// mutated. The `Context` type is injected into every hook when the actor starts
/// (`run(context)`), which lets dependencies be wired after construction.
///
/// # Drafts
/// `on_update` and `handle_action` run against a clone of the stored entity. The actor
/// commits the clone only when the hook returns `Ok`, so a hook may mutate freely before
/// deciding to fail.
#[async_trait]
pub trait ActorEntity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `DecrementStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per message. Clients match on a single
    /// type, at the cost of every operation's signature admitting every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier stored inside the entity. Used when restoring a persisted collection.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether `action` only reads. Read-only actions skip the commit and the snapshot write.
    fn is_read_only(_action: &Self::Action) -> bool {
        false
    }
}
