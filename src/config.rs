//! Configuration management for the local auth portal
//!
//! Separates startup configuration (storage layout, password scheme) from
//! runtime configuration (message and redirect timings).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::auth::PasswordScheme;

/// Environment variable prefix, e.g. `LOCAL_AUTH_DATA_DIR=/var/lib/auth`
const ENV_PREFIX: &str = "LOCAL_AUTH";

/// Complete portal configuration as read from `config.toml` and the environment
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    // ═══ STORAGE ═══
    /// Directory holding the persisted slots, one file per key
    pub data_dir: String,

    /// Key of the persisted user list
    pub users_key: String,

    /// Key of the session-scoped username marker
    pub session_key: String,

    // ═══ CREDENTIALS ═══
    /// `plaintext` (browser data format) or `bcrypt`
    pub password_scheme: String,

    /// Work factor for the bcrypt scheme
    pub bcrypt_cost: u32,

    // ═══ CONSOLE ═══
    pub max_command_length: usize,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,

    // ═══ RUNTIME ═══
    pub message_timeout_ms: u64,
    pub redirect_target: String,
    pub redirect_delay_ms: u64,
}

/// Configuration fixed for the lifetime of the process
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub data_dir: PathBuf,
    pub users_key: String,
    pub session_key: String,
    pub password_scheme: PasswordScheme,
    pub bcrypt_cost: u32,
    pub max_command_length: usize,
    pub log_level: String,
}

/// Timings and targets consulted on every submit
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub message_timeout_ms: u64,
    pub redirect_target: String,
    pub redirect_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            users_key: "localUsersDB".to_string(),
            session_key: "currentUsername".to_string(),
            password_scheme: "plaintext".to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            max_command_length: 512,
            log_level: "info".to_string(),
            message_timeout_ms: 4000,
            redirect_target: "index.html".to_string(),
            redirect_delay_ms: 1000,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides.
    ///
    /// The file is optional; built-in defaults fill whatever it leaves out.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Packaged layout first, then the working directory
        Self::load_from(&["local-auth/config", "config"])
    }

    /// Load configuration from the given file stems (extension inferred).
    pub fn load_from(config_paths: &[&str]) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("data_dir", defaults.data_dir)?
            .set_default("users_key", defaults.users_key)?
            .set_default("session_key", defaults.session_key)?
            .set_default("password_scheme", defaults.password_scheme)?
            .set_default("bcrypt_cost", i64::from(defaults.bcrypt_cost))?
            .set_default("max_command_length", defaults.max_command_length as i64)?
            .set_default("log_level", defaults.log_level)?
            .set_default("message_timeout_ms", defaults.message_timeout_ms as i64)?
            .set_default("redirect_target", defaults.redirect_target)?
            .set_default("redirect_delay_ms", defaults.redirect_delay_ms as i64)?;

        for config_path in config_paths {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Split into the startup and runtime parts
    pub fn split(self) -> Result<(StartupConfig, RuntimeConfig), config::ConfigError> {
        let password_scheme = self
            .password_scheme
            .parse::<PasswordScheme>()
            .map_err(config::ConfigError::Message)?;

        let startup = StartupConfig {
            data_dir: PathBuf::from(self.data_dir),
            users_key: self.users_key,
            session_key: self.session_key,
            password_scheme,
            bcrypt_cost: self.bcrypt_cost,
            max_command_length: self.max_command_length,
            log_level: self.log_level,
        };
        let runtime = RuntimeConfig {
            message_timeout_ms: self.message_timeout_ms,
            redirect_target: self.redirect_target,
            redirect_delay_ms: self.redirect_delay_ms,
        };
        Ok((startup, runtime))
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.data_dir.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "data_dir cannot be empty".into(),
            ));
        }

        if self.users_key.trim().is_empty() || self.session_key.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "users_key and session_key cannot be empty".into(),
            ));
        }

        if self.users_key == self.session_key {
            return Err(config::ConfigError::Message(
                "users_key and session_key must differ".into(),
            ));
        }

        let scheme = self
            .password_scheme
            .parse::<PasswordScheme>()
            .map_err(config::ConfigError::Message)?;

        if scheme == PasswordScheme::Bcrypt && !(4..=31).contains(&self.bcrypt_cost) {
            return Err(config::ConfigError::Message(format!(
                "bcrypt_cost must be between 4 and 31, got {}",
                self.bcrypt_cost
            )));
        }

        if self.max_command_length == 0 {
            return Err(config::ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        if self.redirect_target.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "redirect_target cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl RuntimeConfig {
    /// How long a message stays visible
    pub fn message_timeout(&self) -> Duration {
        Duration::from_millis(self.message_timeout_ms)
    }

    /// Delay between a successful login and the redirect
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let defaults = AppConfig::default();
        Self {
            message_timeout_ms: defaults.message_timeout_ms,
            redirect_target: defaults.redirect_target,
            redirect_delay_ms: defaults.redirect_delay_ms,
        }
    }
}
