//! Login/registration portal
//!
//! Wires the user store, the password verifier, the session marker, and the
//! view model into the two form submit handlers.

pub mod core;
pub mod handlers;
pub mod results;

pub use self::core::{FilePortal, Portal};
pub use results::{Redirect, SubmitResult, SubmitStatus};
