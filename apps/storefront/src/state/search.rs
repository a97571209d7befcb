//! # Search Box
//!
//! Debounces navbar search input. An edit is released to the product list
//! only after the input has been quiet for the debounce period, and only
//! the last edit in a burst is released.
//!
//! ```text
//!  edit "l"   edit "la"   edit "lap"         300ms quiet
//!    │           │           │ ─────────────────────────► poll() = "lap"
//!    └───────────┴── each edit restarts the timer
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SearchBox {
    debounce: Duration,
    text: String,
    pending_since: Option<Instant>,
    applied: String,
}

impl SearchBox {
    pub fn new(debounce: Duration) -> Self {
        SearchBox {
            debounce,
            text: String::new(),
            pending_since: None,
            applied: String::new(),
        }
    }

    /// Records an edit made now.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.edit_at(text, Instant::now());
    }

    /// Records an edit made at `now`.
    pub fn edit_at(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.pending_since = Some(now);
    }

    /// Releases the pending text if the quiet period has passed.
    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }

    /// Releases the pending text if the quiet period has passed by `now`.
    pub fn poll_at(&mut self, now: Instant) -> Option<String> {
        let since = self.pending_since?;
        if now.saturating_duration_since(since) < self.debounce {
            return None;
        }
        self.pending_since = None;
        self.applied = self.text.clone();
        Some(self.applied.clone())
    }

    /// Releases the pending text immediately (form submit).
    pub fn submit(&mut self) -> String {
        self.pending_since = None;
        self.applied = self.text.clone();
        self.applied.clone()
    }

    /// How long until a pending edit is released, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending_since
            .map(|since| self.debounce.saturating_sub(now.saturating_duration_since(since)))
    }

    /// Current input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text last released to the product list.
    pub fn applied(&self) -> &str {
        &self.applied
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }
}
