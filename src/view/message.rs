//! Transient user-facing messages

use std::fmt;
use std::time::{Duration, Instant};

/// Colour class of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Error => "error",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A message shown at a point in time for a fixed duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    tone: Tone,
    shown_at: Instant,
    visible_for: Duration,
}

impl Message {
    pub fn new(text: impl Into<String>, tone: Tone, shown_at: Instant, visible_for: Duration) -> Self {
        Self {
            text: text.into(),
            tone,
            shown_at,
            visible_for,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Whether the message is still on screen at `now`
    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.visible_for
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.tone, self.text)
    }
}
