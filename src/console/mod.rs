//! Interactive console
//!
//! Reads commands line by line and drives the portal, one command at a time.

pub mod handler;

pub use handler::run_console;
