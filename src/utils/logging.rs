//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::Env;

/// Setup logging for the portal.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `info`) applies.
/// Calling this more than once is harmless.
pub fn setup_logging(default_filter: &str) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init();
}
