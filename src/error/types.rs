//! Error types
//!
//! Defines domain-specific error types for each module of the portal.

use std::fmt;
use std::io;

/// Credential module errors
#[derive(Debug)]
pub enum AuthError {
    /// Empty username or password at registration
    MissingCredentials,
    DuplicateUser(String),
    NotFound(String),
    WrongPassword(String),
    /// The configured verifier could not protect a password
    Hashing(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredentials => write!(f, "Username and password are required"),
            AuthError::DuplicateUser(u) => write!(f, "User already exists: {}", u),
            AuthError::NotFound(u) => write!(f, "User not found: {}", u),
            AuthError::WrongPassword(u) => write!(f, "Wrong password for user: {}", u),
            AuthError::Hashing(msg) => write!(f, "Password hashing failed: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    InvalidKey(String),
    IoError(io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidKey(k) => write!(f, "Invalid storage key: {}", k),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
            StorageError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(e) => Some(e),
            StorageError::Serialization(e) => Some(e),
            StorageError::InvalidKey(_) => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error)
    }
}

/// General portal error that encompasses all error types
#[derive(Debug)]
pub enum PortalError {
    Auth(AuthError),
    Storage(StorageError),
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Auth(e) => write!(f, "Authentication error: {}", e),
            PortalError::Storage(e) => write!(f, "Storage error: {}", e),
            PortalError::Config(e) => write!(f, "Configuration error: {}", e),
            PortalError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PortalError {}

impl From<AuthError> for PortalError {
    fn from(error: AuthError) -> Self {
        PortalError::Auth(error)
    }
}

impl From<StorageError> for PortalError {
    fn from(error: StorageError) -> Self {
        PortalError::Storage(error)
    }
}

impl From<config::ConfigError> for PortalError {
    fn from(error: config::ConfigError) -> Self {
        PortalError::Config(error)
    }
}

impl From<io::Error> for PortalError {
    fn from(error: io::Error) -> Self {
        PortalError::IoError(error)
    }
}
