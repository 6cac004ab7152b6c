//! # Settings
//!
//! Admin credentials, the hero image and the footer links. There is exactly one
//! [`Settings`] value, so it lives behind a lock instead of in a resource actor.
//!
//! Every mutation works on a copy, saves it, and only then replaces the current value.
//! A failed save leaves the settings as they were and returns [`SettingsError::Store`].

mod error;

pub use error::SettingsError;

use crate::model::{CustomLink, Settings};
use actor_framework::BlobStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

/// Form data for a credential change.
#[derive(Debug, Clone, Default)]
pub struct CredentialChange {
    pub current_password: String,
    /// A blank username keeps the current one.
    pub new_username: String,
    /// A blank password keeps the current one.
    pub new_password: String,
    pub confirm_password: String,
}

/// Shared handle to the admin settings. Clones see the same value.
#[derive(Clone)]
pub struct SettingsStore {
    current: Arc<RwLock<Settings>>,
    store: Arc<dyn BlobStore>,
    key: String,
}

impl SettingsStore {
    /// Loads the settings saved under `key`, or the defaults when nothing is saved.
    pub fn open(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Result<Self, SettingsError> {
        let key = key.into();
        let settings: Settings = match store.load(&key)? {
            Some(blob) => serde_json::from_str(&blob).map_err(actor_framework::StoreError::from)?,
            None => Settings::default(),
        };
        info!(%key, links = settings.custom_links.len(), "Settings loaded");
        Ok(Self {
            current: Arc::new(RwLock::new(settings)),
            store,
            key,
        })
    }

    pub async fn snapshot(&self) -> Settings {
        self.current.read().await.clone()
    }

    /// Exact comparison of both fields.
    pub async fn verify_admin(&self, username: &str, password: &str) -> bool {
        let settings = self.current.read().await;
        let ok = settings.admin_username == username && settings.admin_password == password;
        if !ok {
            warn!("Admin login rejected");
        }
        ok
    }

    #[instrument(skip_all)]
    pub async fn change_credentials(&self, change: CredentialChange) -> Result<(), SettingsError> {
        self.mutate(|settings| {
            if change.current_password != settings.admin_password {
                return Err(SettingsError::WrongPassword);
            }
            if !change.new_password.is_empty() && change.new_password != change.confirm_password {
                return Err(SettingsError::PasswordMismatch);
            }
            if !change.new_username.trim().is_empty() {
                settings.admin_username = change.new_username.trim().to_string();
            }
            if !change.new_password.is_empty() {
                settings.admin_password = change.new_password;
            }
            Ok(())
        })
        .await?;
        info!("Admin credentials changed");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn set_hero_image(&self, url: &str) -> Result<(), SettingsError> {
        self.mutate(|settings| {
            settings.hero_image = url.to_string();
            Ok(())
        })
        .await
    }

    /// Appends an active link with the next free numeric id.
    #[instrument(skip(self))]
    pub async fn add_link(&self, name: &str, url: &str) -> Result<CustomLink, SettingsError> {
        self.mutate(|settings| {
            let next = settings
                .custom_links
                .iter()
                .filter_map(|link| link.id.parse::<u64>().ok())
                .max()
                .unwrap_or(0)
                + 1;
            let link = CustomLink::new(next.to_string(), name, url);
            settings.custom_links.push(link.clone());
            Ok(link)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn set_link_active(&self, id: &str, active: bool) -> Result<(), SettingsError> {
        self.mutate(|settings| {
            let link = settings
                .custom_links
                .iter_mut()
                .find(|link| link.id == id)
                .ok_or_else(|| SettingsError::LinkNotFound(id.to_string()))?;
            link.active = active;
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn remove_link(&self, id: &str) -> Result<(), SettingsError> {
        self.mutate(|settings| {
            let before = settings.custom_links.len();
            settings.custom_links.retain(|link| link.id != id);
            if settings.custom_links.len() == before {
                return Err(SettingsError::LinkNotFound(id.to_string()));
            }
            Ok(())
        })
        .await
    }

    /// Links shown in the footer, in their configured order.
    pub async fn active_links(&self) -> Vec<CustomLink> {
        self.current
            .read()
            .await
            .custom_links
            .iter()
            .filter(|link| link.active)
            .cloned()
            .collect()
    }

    async fn mutate<R>(
        &self,
        edit: impl FnOnce(&mut Settings) -> Result<R, SettingsError>,
    ) -> Result<R, SettingsError> {
        let mut current = self.current.write().await;
        let mut draft = current.clone();
        let out = edit(&mut draft)?;
        let blob = serde_json::to_string(&draft).map_err(actor_framework::StoreError::from)?;
        self.store.save(&self.key, &blob)?;
        *current = draft;
        Ok(out)
    }
}
