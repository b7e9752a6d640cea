//! Credential records
//!
//! The stored shape of a registered user. The JSON layout is the browser's
//! `localUsersDB` array, so data exported from `localStorage` loads unchanged.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// One registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    username: String,
    password: String,
    #[serde(default, with = "empty_as_none")]
    email: Option<String>,
    #[serde(with = "iso_millis")]
    registration_date: DateTime<Utc>,
}

/// A registration candidate before it is stamped and stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    /// Already protected by the configured verifier
    pub password: String,
    pub email: Option<String>,
}

impl UserRecord {
    pub fn new(candidate: NewUser, registration_date: DateTime<Utc>) -> Self {
        Self {
            username: candidate.username,
            password: candidate.password,
            email: candidate.email.filter(|e| !e.is_empty()),
            registration_date,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// The stored password value (plaintext or hash, per verifier)
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn registration_date(&self) -> DateTime<Utc> {
        self.registration_date
    }
}

/// Current time at the precision the slot format keeps
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// `Option<String>` stored as `""` when absent.
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}

/// Timestamps in the `Date.prototype.toISOString` shape: `2024-05-01T12:00:00.000Z`.
mod iso_millis {
    use chrono::{DateTime, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    /// Accepts any RFC 3339 offset and precision; normalised to what `serialize` writes
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|date| date.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(de::Error::custom)
    }
}
