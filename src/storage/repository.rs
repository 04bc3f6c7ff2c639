//! Typed repositories over a [`KeyValueStore`].

use super::{KeyValueStore, KEY_IS_AUTHENTICATED, KEY_SETTINGS, KEY_USER_PROFILE};
use crate::auth::UserProfile;
use crate::error::StorageError;
use crate::settings::Settings;

/// Persisted session: the authenticated flag plus the profile record.
#[derive(Debug, Clone)]
pub struct SessionRepository<S> {
    store: S,
}

impl<S: KeyValueStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted profile, if the flag is exactly `"true"` and the profile
    /// record parses. An unparsable record reads as no session.
    pub fn load(&self) -> Result<Option<UserProfile>, StorageError> {
        let flag = self.store.get(KEY_IS_AUTHENTICATED)?;
        if flag.as_deref() != Some("true") {
            return Ok(None);
        }
        let Some(raw) = self.store.get(KEY_USER_PROFILE)? else {
            return Ok(None);
        };
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable persisted profile");
                Ok(None)
            }
        }
    }

    pub fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(KEY_USER_PROFILE, &raw)?;
        self.store.set(KEY_IS_AUTHENTICATED, "true")
    }

    /// Removes both entries; the flag goes first so a half-finished clear
    /// never reads back as a session.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(KEY_IS_AUTHENTICATED)?;
        self.store.remove(KEY_USER_PROFILE)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Persisted [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsRepository<S> {
    store: S,
}

impl<S: KeyValueStore> SettingsRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored settings, or defaults when absent or unparsable.
    pub fn load(&self) -> Result<Settings, StorageError> {
        let Some(raw) = self.store.get(KEY_SETTINGS)? else {
            return Ok(Settings::default());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring unreadable settings, using defaults");
            Settings::default()
        }))
    }

    pub fn save(&self, settings: &Settings) -> Result<(), StorageError> {
        let raw = serde_json::to_string(settings)?;
        self.store.set(KEY_SETTINGS, &raw)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(KEY_SETTINGS)
    }
}
