//! Error types for the admin settings.

use actor_framework::StoreError;
use thiserror::Error;

/// Errors that can occur while changing the admin settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The current password given with a credential change did not match.
    #[error("Current password is wrong")]
    WrongPassword,

    /// The new password and its confirmation differ.
    #[error("New passwords do not match")]
    PasswordMismatch,

    /// No custom link has the given id.
    #[error("Link not found: {0}")]
    LinkNotFound(String),

    /// The updated settings could not be written. The previous value is kept.
    #[error("Settings could not be stored: {0}")]
    Store(#[from] StoreError),
}
