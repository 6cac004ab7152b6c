//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one collection of
//! entities. It is the "server" side of the Actor Model: requests arrive over a channel and
//! are processed one at a time, so the collection needs no locks.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::persistence::{BlobStore, StoreError};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// How many times `Create` asks the id generator for an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 16;

/// Short type name for log fields ("Product" rather than "storefront::model::product::Product").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

struct Snapshot {
    store: Arc<dyn BlobStore>,
    key: String,
}

/// The generic actor that manages a collection of entities.
///
/// ## ResourceActor
///
/// `ResourceActor<T>` owns the in-memory collection for an entity type `T: ActorEntity` and
/// processes every `ResourceRequest<T>` sequentially on its own Tokio task. Two requests
/// touching the same entity can never interleave, which is what keeps read-modify-write
/// operations (like a stock decrement) free of lost updates.
///
/// * **Ordering**: the collection remembers insertion order. `List` returns newest first.
/// * **Ids**: generated by the closure passed to [`ResourceActor::new`]. A generated id that
///   is already taken is discarded and the closure is asked again.
/// * **Snapshots**: after [`ResourceActor::restore`], every successful mutation rewrites the
///   whole collection to the configured [`BlobStore`] key.
/// * **Context injection**: the value passed to [`ResourceActor::run`] is handed to every
///   entity hook.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Restore** (optional): `actor.restore(store, key)` loads the previous snapshot.
/// 3.  **Run**: spawn `actor.run(context)` with the actor's dependencies.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate(String);
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: p.0 })
///     }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let counter = std::sync::atomic::AtomicU32::new(1);
///     let (actor, client) = ResourceActor::<Note>::new(10, move || {
///         counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
///     });
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate("hello".into())).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// Ids in insertion order, newest first.
    order: VecDeque<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    snapshot: Option<Snapshot>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id_fn` - Produces candidate ids for `Create`.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: VecDeque::new(),
            next_id_fn: Box::new(next_id_fn),
            snapshot: None,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Loads the collection saved under `key` and keeps `store` as the snapshot target
    /// for every later mutation.
    ///
    /// Returns `true` if a snapshot existed. A snapshot that does not parse is an error;
    /// the actor is left empty in that case.
    pub fn restore(
        &mut self,
        store: Arc<dyn BlobStore>,
        key: impl Into<String>,
    ) -> Result<bool, StoreError> {
        let key = key.into();
        let found = match store.load(&key)? {
            Some(blob) => {
                let items: Vec<T> = serde_json::from_str(&blob)?;
                self.store.clear();
                self.order.clear();
                for item in items {
                    let id = item.id().clone();
                    if self.store.insert(id.clone(), item).is_none() {
                        self.order.push_back(id);
                    }
                }
                true
            }
            None => false,
        };
        info!(entity_type = entity_type::<T>(), %key, found, size = self.store.len(), "Restored");
        self.snapshot = Some(Snapshot { store, key });
        Ok(found)
    }

    /// Inserts entities before the actor starts. They are listed in the order given, after
    /// anything already present, and a snapshot is written.
    pub fn seed(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            let id = item.id().clone();
            if self.store.insert(id.clone(), item).is_none() {
                self.order.push_back(id);
            }
        }
        info!(entity_type = entity_type::<T>(), size = self.store.len(), "Seeded");
        self.persist();
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn allocate_id(&self) -> Result<T::Id, FrameworkError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = (self.next_id_fn)();
            if !self.store.contains_key(&id) {
                return Ok(id);
            }
            debug!(entity_type = entity_type::<T>(), %id, "Generated id already taken");
        }
        Err(FrameworkError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
    }

    fn ordered(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.store.get(id))
    }

    /// Rewrites the whole collection to the snapshot key, if one is configured.
    ///
    /// A failed write is logged and otherwise ignored: the in-memory state stays
    /// authoritative and the next mutation will try again.
    fn persist(&self) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };
        let items: Vec<&T> = self.ordered().collect();
        let result = serde_json::to_string(&items)
            .map_err(StoreError::from)
            .and_then(|blob| snapshot.store.save(&snapshot.key, &blob));
        if let Err(e) = result {
            error!(
                entity_type = entity_type::<T>(),
                key = %snapshot.key,
                error = %e,
                "Snapshot write failed"
            );
        }
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to reach dependencies (like other clients) that were created *after* the actor
    /// was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = match self.allocate_id() {
                        Ok(id) => id,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                            continue;
                        }
                    };

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            self.order.push_front(id.clone());
                            self.persist();
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.ordered().cloned().collect();
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = current.clone();
                    if let Err(e) = draft.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), draft.clone());
                    self.persist();
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(draft));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    self.order.retain(|existing| existing != &id);
                    self.persist();
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let read_only = T::is_read_only(&action);
                    let mut draft = current.clone();
                    let result = draft
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            if !read_only {
                                self.store.insert(id.clone(), draft);
                                self.persist();
                            }
                            info!(entity_type, %id, "Action ok");
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
