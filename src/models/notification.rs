//! Notification models.
//!
//! Notifications form the audit trail of a report: every correction applied
//! to a day's stamps is recorded as one entry, or as a warning followed by a
//! message describing the action taken.

use serde::{Deserialize, Serialize};

/// How important a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The source data deviated from what a report expects.
    Warning,
    /// Informational: describes the correction that was applied.
    Message,
}

/// A single audit entry produced while building a report.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{Notification, Severity};
///
/// let notification = Notification::warning("First In-stamp was not found.");
/// assert_eq!(notification.severity, Severity::Warning);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Human-readable description.
    pub message: String,
    /// The severity level.
    pub severity: Severity,
}

impl Notification {
    /// Creates a notification.
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Creates a [`Severity::Warning`] notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    /// Creates a [`Severity::Message`] notification.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Message)
    }

    /// Returns true for warnings.
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Append-only log of notifications for one report computation.
///
/// Entries can be added and read but never removed, so the log always
/// matches the corrections that were performed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification.
    pub fn push(&mut self, notification: Notification) {
        self.entries.push(notification);
    }

    /// Appends a warning.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Notification::warning(message));
    }

    /// Appends an informational message.
    pub fn note(&mut self, message: impl Into<String>) {
        self.push(Notification::message(message));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in the order they were logged.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Iterates over the warnings only.
    pub fn warnings(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().filter(|n| n.is_warning())
    }

    /// Consumes the log, returning its entries.
    pub fn into_vec(self) -> Vec<Notification> {
        self.entries
    }
}
