use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

/// A single transient message with an expiry deadline
#[derive(Debug, Default)]
pub struct NotificationState {
    message: Option<String>,
    level: Option<NotificationLevel>,
    expires_at: Option<Instant>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message, NotificationLevel::Info, DEFAULT_DURATION);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.show(message, NotificationLevel::Warning, DEFAULT_DURATION);
    }

    pub fn show(&mut self, message: impl Into<String>, level: NotificationLevel, duration: Duration) {
        self.message = Some(message.into());
        self.level = Some(level);
        self.expires_at = Some(Instant::now() + duration);
    }

    /// Current message, expiring it first if the deadline has passed.
    pub fn current(&mut self) -> Option<(&str, NotificationLevel)> {
        if let Some(expires_at) = self.expires_at
            && Instant::now() >= expires_at
        {
            self.dismiss();
        }
        match (&self.message, self.level) {
            (Some(message), Some(level)) => Some((message.as_str(), level)),
            _ => None,
        }
    }

    pub fn dismiss(&mut self) {
        self.message = None;
        self.level = None;
        self.expires_at = None;
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
