//! Utility functions
//!
//! Process-wide setup shared by the binary and tests.

pub mod logging;
