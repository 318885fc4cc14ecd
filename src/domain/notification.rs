//! Transient in-terminal notices that replace browser alerts.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub displayed_at: Option<Instant>,
    pub duration: Duration,
}

impl Notification {
    #[must_use]
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            displayed_at: None,
            duration: Duration::from_secs(5),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// A notice expires once it has been on screen longer than its duration.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.displayed_at
            .is_some_and(|start| now.saturating_duration_since(start) > self.duration)
    }

    pub fn mark_displayed_at(&mut self, now: Instant) {
        if self.displayed_at.is_none() {
            self.displayed_at = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationLevel::Error, "Generation failed", "HTTP 500");
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.title, "Generation failed");
        assert_eq!(n.duration, Duration::from_secs(5));
        assert!(n.displayed_at.is_none());
    }

    #[test]
    fn test_not_expired_before_display() {
        let n = Notification::new(NotificationLevel::Info, "t", "m")
            .with_duration(Duration::from_millis(1));
        assert!(!n.is_expired_at(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn test_expiry_after_duration() {
        let start = Instant::now();
        let mut n = Notification::new(NotificationLevel::Info, "t", "m")
            .with_duration(Duration::from_secs(2));
        n.mark_displayed_at(start);
        n.mark_displayed_at(start + Duration::from_secs(1));

        assert!(!n.is_expired_at(start + Duration::from_secs(2)));
        assert!(n.is_expired_at(start + Duration::from_secs(3)));
    }
}
