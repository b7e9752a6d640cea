//! Key validation
//!
//! Keys become file names, so they are restricted to a safe character set.

use crate::error::StorageError;

/// Longest accepted key
pub const MAX_KEY_LENGTH: usize = 128;

/// Check that a key is usable as a file stem (no separators, no traversal)
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_KEY_LENGTH
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Validate a key, returning it unchanged on success
pub fn validate_key(key: &str) -> Result<&str, StorageError> {
    if is_valid_key(key) {
        Ok(key)
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
