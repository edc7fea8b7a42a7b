//! Trailing-edge debounce.

use std::time::Duration;

/// Collapses a burst of triggers into one invocation after a quiet window.
///
/// Every `trigger` pushes the deadline back; `poll` reports true once, when
/// the deadline has passed with no further triggers. Intermediate triggers
/// are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Record a signal at `now`, restarting the quiet window.
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.wait);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once per burst, after the quiet window elapsed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
