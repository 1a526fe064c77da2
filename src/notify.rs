//! Transient user notifications ("toasts").
//!
//! Callers emit a [`Notification`] through a [`Notifier`] and never wait for
//! an acknowledgment. The TUI collects them in a [`ToastQueue`] that drops
//! each one once its display time has passed.

use std::cell::RefCell;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// How long a notification of this kind stays on screen.
    pub fn display_duration(&self) -> Duration {
        match self {
            NotificationKind::Success => Duration::from_secs(3),
            NotificationKind::Error => Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Collects notifications in memory, in emission order.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: RefCell<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.entries.borrow_mut().push(notification);
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

/// On-screen notifications, newest last.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        let expires_at = now + notification.kind.display_duration();
        match notification.kind {
            NotificationKind::Success => tracing::info!(message = %notification.message, "toast"),
            NotificationKind::Error => tracing::warn!(message = %notification.message, "toast"),
        }
        self.toasts.push(Toast {
            notification,
            expires_at,
        });
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    /// Drop every toast whose display time has run out.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for RefCell<ToastQueue> {
    fn notify(&self, notification: Notification) {
        self.borrow_mut().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_durations() {
        assert_eq!(
            NotificationKind::Success.display_duration(),
            Duration::from_secs(3)
        );
        assert_eq!(
            NotificationKind::Error.display_duration(),
            Duration::from_secs(4)
        );
    }

    #[test]
    fn test_toasts_expire_by_kind() {
        let start = Instant::now();
        let mut queue = ToastQueue::new();
        queue.push_at(Notification::success("saved"), start);
        queue.push_at(Notification::error("failed"), start);

        queue.prune(start + Duration::from_millis(2999));
        assert_eq!(queue.visible().len(), 2);

        queue.prune(start + Duration::from_secs(3));
        assert_eq!(queue.visible().len(), 1);
        assert!(queue.visible()[0].notification.is_error());

        queue.prune(start + Duration::from_secs(4));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_notification_log_take_drains() {
        let log = NotificationLog::new();
        log.notify(Notification::success("one"));
        log.notify(Notification::error("two"));
        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.take().len(), 2);
        assert!(log.entries().is_empty());
    }
}
