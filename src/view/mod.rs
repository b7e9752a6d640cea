//! View model
//!
//! Two-state form toggle, form field values, and the transient message line.

pub mod message;
pub mod state;

pub use message::{Message, Tone};
pub use state::{FormField, LoginForm, RegisterForm, ViewModel, ViewState};
