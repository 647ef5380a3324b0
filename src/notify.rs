//! User-facing notification delivery

use log::{error, info};
use std::sync::Mutex;

/// Outcome class of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation completed
    Success,
    /// Operation failed
    Failure,
}

/// One user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Outcome class
    pub kind: NotificationKind,
    /// Display text
    pub text: String,
}

/// Receiver of user-facing success and failure messages.
///
/// Collection operations emit exactly one notification per terminal
/// outcome; sinks must accept them in sequence without coalescing or
/// dropping any.
pub trait NotificationSink: Send + Sync {
    /// Deliver a success message
    fn notify_success(&self, text: &str);

    /// Deliver a failure message
    fn notify_failure(&self, text: &str);
}

/// Sink that forwards notifications to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify_success(&self, text: &str) {
        info!("{}", text);
    }

    fn notify_failure(&self, text: &str) {
        error!("{}", text);
    }
}

/// Sink that records notifications in memory, in delivery order
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Notification>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every notification delivered so far
    pub fn notifications(&self) -> Vec<Notification> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Texts of the success notifications delivered so far
    pub fn successes(&self) -> Vec<String> {
        self.texts(NotificationKind::Success)
    }

    /// Texts of the failure notifications delivered so far
    pub fn failures(&self) -> Vec<String> {
        self.texts(NotificationKind::Failure)
    }

    /// Drop every recorded notification
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    fn texts(&self, kind: NotificationKind) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.kind == kind)
            .map(|n| n.text)
            .collect()
    }

    fn push(&self, kind: NotificationKind, text: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(Notification {
                kind,
                text: text.to_string(),
            });
        }
    }
}

impl NotificationSink for MemorySink {
    fn notify_success(&self, text: &str) {
        self.push(NotificationKind::Success, text);
    }

    fn notify_failure(&self, text: &str) {
        self.push(NotificationKind::Failure, text);
    }
}
