//! # Generic Messages
//!
//! Request types sent from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants are the CRUD lifecycle of a stored resource plus `List` for reading the
/// whole collection and `Action` for entity-specific operations.
///
/// - **Create**: uses [`ActorEntity::Create`] to build and store a new entity.
/// - **Get**: fetches one entity by ID.
/// - **List**: every entity, newest first.
/// - **Update**: applies an [`ActorEntity::Update`] to an existing entity.
/// - **Delete**: removes an entity.
/// - **Action**: runs a custom [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
