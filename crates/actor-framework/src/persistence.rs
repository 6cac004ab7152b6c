//! # Snapshot Persistence
//!
//! A [`BlobStore`] maps a small set of named keys to opaque JSON text. A `ResourceActor`
//! restores its collection from one key on startup and rewrites that key in full after
//! every successful mutation. There are no partial writes and no append log.
//!
//! Two stores ship with the framework:
//! - [`MemoryStore`]: process-local, for tests and ephemeral runs.
//! - [`JsonFileStore`]: one `<key>.json` file per key inside a directory.

use dashmap::DashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Errors raised while reading or writing snapshots.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable key to blob mapping.
///
/// Implementations must be safe to share between actors; each actor only ever touches its
/// own key.
pub trait BlobStore: Send + Sync {
    /// Returns the blob stored under `key`, or `None` if nothing has been saved yet.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replaces the blob stored under `key`.
    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError>;
}

/// In-memory [`BlobStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blobs: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys written so far.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.blobs.get(key).map(|blob| blob.value().clone()))
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// [`BlobStore`] writing `<dir>/<key>.json`.
///
/// Saves go to `<key>.json.tmp` first and are renamed into place, so a reader never sees
/// a half-written snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens (and creates if needed) the snapshot directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), bytes = blob.len(), "Snapshot written");
        Ok(())
    }
}
