//! Time-decaying, bounded player-facing message log.
//! This module exists to isolate message lifetime bookkeeping from interaction rules.
//! It does not own message wording or when interactions fire.

use std::collections::VecDeque;

/// How long a message stays readable, in seconds.
pub const MESSAGE_LIFETIME: f64 = 1.5;
/// Oldest messages are evicted past this count even before they expire.
pub const MESSAGE_CAP: usize = 5;

#[derive(Clone, Debug)]
pub struct TimedMessage {
    pub text: String,
    pub created_at: f64,
    pub lifetime: f64,
    pub remaining: f64,
}

/// Bounded queue of recent messages, oldest first. Callers drive expiry by
/// passing the current clock into `update`; no timer runs here.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    entries: VecDeque<TimedMessage>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: &str, now: f64) {
        self.entries.push_back(TimedMessage {
            text: text.to_string(),
            created_at: now,
            lifetime: MESSAGE_LIFETIME,
            remaining: MESSAGE_LIFETIME,
        });
        while self.entries.len() > MESSAGE_CAP {
            self.entries.pop_front();
        }
    }

    /// Recompute remaining lifetimes against `now` and drop expired entries.
    pub fn update(&mut self, now: f64) {
        for entry in &mut self.entries {
            entry.remaining = entry.lifetime - (now - entry.created_at);
        }
        self.entries.retain(|entry| entry.remaining > 0.0);
    }

    /// Active message texts, most recent last.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
