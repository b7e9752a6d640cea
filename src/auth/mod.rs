//! Authentication system
//!
//! Handles the user list, credential verification, and registration rules.

pub mod credentials;
pub mod results;
pub mod store;
pub mod validator;
pub mod verifier;

pub use credentials::{NewUser, UserRecord};
pub use results::AuthOutcome;
pub use store::{SlotUserStore, UserStore};
pub use validator::{authenticate, find_by_username, register};
pub use verifier::{
    BcryptVerifier, CredentialVerifier, PasswordScheme, PlaintextVerifier, build_verifier,
};
