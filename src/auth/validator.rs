//! Credential checks
//!
//! Pure functions over an in-memory user list. Loading and saving the list is
//! the store's job; nothing here touches storage.

use super::credentials::{NewUser, UserRecord, now_millis};
use super::results::AuthOutcome;
use super::verifier::CredentialVerifier;
use chrono::{DateTime, Utc};
use crate::error::AuthError;

/// Case-insensitive username comparison
pub fn usernames_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// First record whose username matches `name` case-insensitively.
pub fn find_by_username<'a>(records: &'a [UserRecord], name: &str) -> Option<&'a UserRecord> {
    records.iter().find(|user| usernames_match(user.username(), name))
}

/// Appends `candidate`, stamped with the current time.
///
/// Fails with [`AuthError::DuplicateUser`] if the username is taken in any
/// letter case. The input list is consumed either way.
pub fn register(records: Vec<UserRecord>, candidate: NewUser) -> Result<Vec<UserRecord>, AuthError> {
    register_at(records, candidate, now_millis())
}

/// [`register`] with an explicit registration time
pub fn register_at(
    mut records: Vec<UserRecord>,
    candidate: NewUser,
    registered_at: DateTime<Utc>,
) -> Result<Vec<UserRecord>, AuthError> {
    if let Some(existing) = find_by_username(&records, &candidate.username) {
        return Err(AuthError::DuplicateUser(existing.username().to_string()));
    }

    records.push(UserRecord::new(candidate, registered_at));
    Ok(records)
}

/// Looks up `username` and checks `password` with `verifier`.
pub fn authenticate(
    records: &[UserRecord],
    username: &str,
    password: &str,
    verifier: &dyn CredentialVerifier,
) -> AuthOutcome {
    match find_by_username(records, username) {
        None => AuthOutcome::NotFound,
        Some(user) if verifier.verify(user.password(), password) => {
            AuthOutcome::Success(user.clone())
        }
        Some(_) => AuthOutcome::WrongPassword,
    }
}
