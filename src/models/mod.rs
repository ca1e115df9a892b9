//! Core data models for the worktime engine.
//!
//! This module contains the stamps, notifications and report containers
//! used throughout the engine.

mod notification;
mod protocol;
mod stamp;

pub use notification::{Notification, NotificationLog, Severity};
pub use protocol::{DailyReport, ReportProtocol};
pub use stamp::{EmployeeId, Stamp, StampKind};
