//! Password verification
//!
//! Decides what gets stored in place of a password at registration and how a
//! presented password is checked against it at login.

use log::warn;
use std::fmt;
use std::str::FromStr;

use crate::error::AuthError;

/// How a password is stored and compared.
pub trait CredentialVerifier {
    /// Value to persist for a newly registered password.
    fn protect(&self, password: &str) -> Result<String, AuthError>;

    /// Whether `presented` matches the persisted `stored` value.
    fn verify(&self, stored: &str, presented: &str) -> bool;
}

/// Exact string comparison against the stored plaintext.
///
/// Matches the browser data format; no trimming or case folding.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaintextVerifier;

impl CredentialVerifier for PlaintextVerifier {
    fn protect(&self, password: &str) -> Result<String, AuthError> {
        Ok(password.to_string())
    }

    fn verify(&self, stored: &str, presented: &str) -> bool {
        stored == presented
    }
}

/// Salted bcrypt hashes
#[derive(Debug, Clone, Copy)]
pub struct BcryptVerifier {
    cost: u32,
}

impl BcryptVerifier {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptVerifier {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialVerifier for BcryptVerifier {
    fn protect(&self, password: &str) -> Result<String, AuthError> {
        bcrypt::hash(password, self.cost).map_err(|e| AuthError::Hashing(e.to_string()))
    }

    fn verify(&self, stored: &str, presented: &str) -> bool {
        match bcrypt::verify(presented, stored) {
            Ok(matched) => matched,
            Err(e) => {
                // Typically a plaintext record written before switching schemes
                warn!("Stored password is not a bcrypt hash: {}", e);
                false
            }
        }
    }
}

/// Selectable password storage schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordScheme {
    Plaintext,
    Bcrypt,
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plaintext" | "plain" => Ok(PasswordScheme::Plaintext),
            "bcrypt" => Ok(PasswordScheme::Bcrypt),
            other => Err(format!("Unknown password scheme: {}", other)),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordScheme::Plaintext => write!(f, "plaintext"),
            PasswordScheme::Bcrypt => write!(f, "bcrypt"),
        }
    }
}

/// Builds the verifier for a configured scheme
pub fn build_verifier(scheme: PasswordScheme, bcrypt_cost: u32) -> Box<dyn CredentialVerifier> {
    match scheme {
        PasswordScheme::Plaintext => Box::new(PlaintextVerifier),
        PasswordScheme::Bcrypt => Box::new(BcryptVerifier::new(bcrypt_cost)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plaintext_is_exact_match() {
        let verifier = PlaintextVerifier;
        let stored = verifier.protect("Secret ").unwrap();
        assert_eq!(stored, "Secret ");
        assert!(verifier.verify(&stored, "Secret "));
        assert!(!verifier.verify(&stored, "Secret"));
        assert!(!verifier.verify(&stored, "secret "));
    }

    #[test]
    fn bcrypt_hashes_and_verifies() {
        // Minimum cost keeps the test fast
        let verifier = BcryptVerifier::new(4);
        let stored = verifier.protect("pw").unwrap();
        assert_ne!(stored, "pw");
        assert!(stored.starts_with("$2"));
        assert!(verifier.verify(&stored, "pw"));
        assert!(!verifier.verify(&stored, "PW"));
    }

    #[test]
    fn bcrypt_rejects_plaintext_records() {
        let verifier = BcryptVerifier::new(4);
        assert!(!verifier.verify("pw", "pw"));
    }

    #[test]
    fn parses_schemes() {
        assert_eq!("Plaintext".parse::<PasswordScheme>(), Ok(PasswordScheme::Plaintext));
        assert_eq!(" bcrypt".parse::<PasswordScheme>(), Ok(PasswordScheme::Bcrypt));
        assert!("md5".parse::<PasswordScheme>().is_err());
    }
}
