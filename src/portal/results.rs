//! Portal result types

use std::time::Duration;

use crate::view::Tone;

/// Navigation requested after a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub target: String,
    pub delay: Duration,
}

/// What a submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Registered { username: String },
    LoggedIn { username: String, redirect: Redirect },
    Rejected,
}

/// Result of a form submit, including the message it put on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub status: SubmitStatus,
    pub message: String,
    pub tone: Tone,
}

impl SubmitResult {
    pub fn is_rejected(&self) -> bool {
        self.status == SubmitStatus::Rejected
    }
}
