//! Error handling
//!
//! Defines error types and handling for the auth portal.

pub mod handlers;
pub mod types;

pub use types::*;
