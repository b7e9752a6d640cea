//! User store
//!
//! Loads and saves the whole user list through a key-value slot. Every
//! operation reads the full list and every mutation rewrites it.

use log::{debug, warn};

use super::credentials::UserRecord;
use crate::error::StorageError;
use crate::storage::KeyValueStorage;

/// Persistence for the ordered user list
pub trait UserStore {
    /// Reads the full list. An empty or unreadable slot yields an empty list.
    fn load(&self) -> Result<Vec<UserRecord>, StorageError>;

    /// Overwrites the slot with `records`.
    fn save(&mut self, records: &[UserRecord]) -> Result<(), StorageError>;

    /// Number of registered users
    fn user_count(&self) -> Result<usize, StorageError> {
        Ok(self.load()?.len())
    }

    /// Registered usernames in insertion order
    fn usernames(&self) -> Result<Vec<String>, StorageError> {
        Ok(self
            .load()?
            .into_iter()
            .map(|user| user.username().to_string())
            .collect())
    }
}

/// A [`UserStore`] serialized as a JSON array under one storage key
#[derive(Debug, Clone)]
pub struct SlotUserStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> SlotUserStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

impl<S: KeyValueStorage> UserStore for SlotUserStore<S> {
    fn load(&self) -> Result<Vec<UserRecord>, StorageError> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        // `null` and other non-array JSON land here too
        match serde_json::from_str::<Vec<UserRecord>>(&raw) {
            Ok(records) => {
                debug!("Loaded {} users from '{}'", records.len(), self.key);
                Ok(records)
            }
            Err(e) => {
                warn!(
                    "Ignoring malformed user list in '{}' ({} bytes): {}",
                    self.key,
                    raw.len(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, records: &[UserRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)?;
        self.storage.set_item(&self.key, &json)?;
        debug!("Saved {} users to '{}'", records.len(), self.key);
        Ok(())
    }
}
