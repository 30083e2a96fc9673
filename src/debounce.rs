//! Keystroke debouncer
//!
//! Every content-changing keystroke re-arms a fixed-delay deadline; the event
//! loop polls `fire_if_due()` each tick. Only a deadline that survives
//! without being re-armed fires, so a burst of typing produces at most one
//! fetch for the final settled query.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Debouncer {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    /// (Re)arm the deadline. A pending deadline is replaced, which is what
    /// cancels the previous keystroke's pending fire.
    pub fn schedule(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Drop any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when an armed deadline has elapsed.
    pub fn fire_if_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Force a pending deadline to fire immediately (tests and explicit
    /// submit paths that must not wait out the delay).
    pub fn flush(&mut self) -> bool {
        if self.deadline.is_some() {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
