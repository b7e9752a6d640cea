//! Error handlers
//!
//! Logs portal errors and turns them into the transient messages the user sees.

use crate::error::types::{AuthError, PortalError};
use crate::view::Tone;
use log::{error, warn};

/// Handle a portal error that ends a submit
pub fn handle_error(err: &PortalError) {
    match err {
        // Expected outcomes of a form submit
        PortalError::Auth(AuthError::Hashing(_)) => error!("Portal error: {}", err),
        PortalError::Auth(_) => warn!("Rejected submit: {}", err),
        _ => error!("Portal error: {}", err),
    }
}

/// Tone of the message shown for an error
pub fn error_to_tone(err: &PortalError) -> Tone {
    match err {
        PortalError::Auth(AuthError::DuplicateUser(_)) => Tone::Warning,
        _ => Tone::Error,
    }
}

/// User-facing text for an error
pub fn error_to_message(err: &PortalError) -> String {
    match err {
        PortalError::Auth(AuthError::MissingCredentials) => {
            "Username and password are required.".to_string()
        }
        PortalError::Auth(AuthError::DuplicateUser(_)) => {
            "User already exists. Please login.".to_string()
        }
        PortalError::Auth(AuthError::NotFound(username)) => format!(
            "User '{}' not found. Asking for registration details.",
            username
        ),
        PortalError::Auth(AuthError::WrongPassword(_)) => {
            "Wrong password. Please try again.".to_string()
        }
        PortalError::Auth(AuthError::Hashing(_)) => {
            "Unable to secure the password. Please try again.".to_string()
        }
        PortalError::Storage(_) | PortalError::IoError(_) => {
            "Unable to access the user database. Please try again.".to_string()
        }
        PortalError::Config(_) => "The portal is misconfigured.".to_string(),
    }
}
