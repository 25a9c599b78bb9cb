use std::time::{Duration, Instant};

/// Drops repeated triggers of one control that arrive within `window` of
/// the last accepted trigger.
///
/// Rejected triggers are discarded, not queued, and do not extend the window.
#[derive(Debug, Clone)]
pub struct ActionGuard {
    window: Duration,
    last: Option<Instant>,
}

impl ActionGuard {
    pub fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    /// Returns `true` and records `now` if the trigger should be handled.
    pub fn try_accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last
            && now.saturating_duration_since(last) < self.window
        {
            return false;
        }
        self.last = Some(now);
        true
    }
}
