//! Authentication result types

use super::credentials::UserRecord;
use crate::error::AuthError;

/// Outcome of checking a username/password pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    NotFound,
    WrongPassword,
    Success(UserRecord),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success(_))
    }

    /// Converts the two failure outcomes into errors naming `username`.
    pub fn into_result(self, username: &str) -> Result<UserRecord, AuthError> {
        match self {
            AuthOutcome::Success(user) => Ok(user),
            AuthOutcome::NotFound => Err(AuthError::NotFound(username.to_string())),
            AuthOutcome::WrongPassword => Err(AuthError::WrongPassword(username.to_string())),
        }
    }
}
