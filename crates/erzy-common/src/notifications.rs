use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A dismissible toast shown above the overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Notification {
    /// Creates an info toast with a 3-second TTL.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(3),
        }
    }

    /// Creates an error toast with a 6-second TTL.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            created_at: Instant::now(),
            ttl: Duration::from_secs(6),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns `true` if this toast has exceeded its TTL.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}

/// A bounded queue of toasts that auto-evicts expired entries.
#[derive(Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes a toast, evicting expired entries first.
    /// If still at capacity after eviction, the oldest entry is removed.
    pub fn push(&mut self, notification: Notification) {
        self.evict_expired();
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notification);
    }

    /// Returns all currently visible (non-expired) toasts.
    pub fn visible(&mut self) -> Vec<&Notification> {
        self.evict_expired();
        self.items.iter().collect()
    }

    /// Dismiss every toast.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn evict_expired(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_visible() {
        let mut queue = NotificationQueue::new(4);
        queue.push(Notification::info("copy mode active"));
        let visible = queue.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].message, "copy mode active");
        assert_eq!(visible[0].level, NotificationLevel::Info);
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut queue = NotificationQueue::new(2);
        queue.push(Notification::info("a"));
        queue.push(Notification::info("b"));
        queue.push(Notification::error("c"));
        let messages: Vec<_> = queue.visible().iter().map(|n| n.message.clone()).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn expired_toasts_are_evicted() {
        let mut queue = NotificationQueue::new(4);
        queue.push(Notification::info("gone").with_ttl(Duration::ZERO));
        assert!(queue.visible().is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_dismisses_everything() {
        let mut queue = NotificationQueue::default();
        queue.push(Notification::error("x"));
        queue.clear();
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn error_outlives_info() {
        assert!(Notification::error("e").ttl > Notification::info("i").ttl);
    }
}
