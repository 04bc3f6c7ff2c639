//! Persistent key-value storage behind a small trait, plus typed repositories.
//!
//! The layout mirrors browser local storage: flat string keys, string values,
//! JSON for structured records. Backends:
//! - [`MemoryStore`]: in-process map (tests, ephemeral sessions)
//! - [`FileStore`]: one JSON object on disk
//!
//! Access is last-writer-wins with no cross-process locking; only one session
//! is ever active per process.

pub mod file;
pub mod memory;
pub mod repository;

use crate::error::StorageError;
use std::sync::Arc;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{SessionRepository, SettingsRepository};

/// `"true"` while a session is active.
pub const KEY_IS_AUTHENTICATED: &str = "isAuthenticated";

/// JSON-serialized [`UserProfile`](crate::auth::UserProfile).
pub const KEY_USER_PROFILE: &str = "userProfile";

/// JSON-serialized [`Settings`](crate::settings::Settings).
pub const KEY_SETTINGS: &str = "protocolMonitorSettings";

/// Flat string key-value store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
