//! In-memory storage
//!
//! Backs the session marker and stands in for durable storage in tests.

use std::collections::HashMap;

use crate::error::StorageError;
use crate::storage::slot::KeyValueStorage;

/// Slots that live as long as the value itself
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("currentUsername").unwrap(), None);

        storage.set_item("currentUsername", "Alice").unwrap();
        assert_eq!(
            storage.get_item("currentUsername").unwrap().as_deref(),
            Some("Alice")
        );

        storage.set_item("currentUsername", "Bob").unwrap();
        assert_eq!(
            storage.get_item("currentUsername").unwrap().as_deref(),
            Some("Bob")
        );

        // Removing an absent slot is not an error
        storage.remove_item("currentUsername").unwrap();
        storage.remove_item("currentUsername").unwrap();
        assert_eq!(storage.get_item("currentUsername").unwrap(), None);
    }
}
