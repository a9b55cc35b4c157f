use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warn,
    Error,
}

/// Transient message shown over the current screen.
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
            duration: Duration::from_secs(4),
        }
    }

    #[must_use]
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, message)
    }

    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, message)
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.displayed_at
            .is_some_and(|start| now.saturating_duration_since(start) > self.duration)
    }

    pub fn mark_displayed(&mut self, now: Instant) {
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
        let n = Notification::info("Saved", "Living Room added");
        assert_eq!(n.level, NotificationLevel::Info);
        assert_eq!(n.title, "Saved");
        assert_eq!(n.duration, Duration::from_secs(4));
    }

    #[test]
    fn test_expiry_counts_from_first_display() {
        let start = Instant::now();
        let mut n = Notification::error("Browser", "no handler").with_duration(Duration::from_secs(1));

        assert!(!n.is_expired_at(start + Duration::from_secs(10)));

        n.mark_displayed(start);
        n.mark_displayed(start + Duration::from_millis(900));

        assert!(!n.is_expired_at(start + Duration::from_millis(1000)));
        assert!(n.is_expired_at(start + Duration::from_millis(1001)));
    }
}
