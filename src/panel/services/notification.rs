//! # Notification Service
//!
//! The user-facing error surface for consequential failures. List
//! refresh failures never go through here; a stale list is
//! non-destructive and is only logged.

/// Blocking error surface for failed saves and deletes.
pub trait NotificationSink: Send + Sync {
    /// Surface an error message to the user.
    fn error(&self, message: &str);
}

/// Sink that writes to stderr and mirrors into the log.
pub struct ConsoleNotificationSink;

impl NotificationSink for ConsoleNotificationSink {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
        eprintln!("error: {message}");
    }
}
