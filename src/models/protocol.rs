//! Report protocol and daily report models.

use chrono::{NaiveDate, TimeDelta};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{EmployeeId, Notification, NotificationLog, Stamp};

/// The result of a report computation paired with its audit trail.
///
/// A caller reading only `result` will not know whether stamps were
/// synthesized or merged. Every such correction is listed in
/// `notifications`.
///
/// # Example
///
/// ```
/// use worktime_engine::models::ReportProtocol;
/// use chrono::TimeDelta;
///
/// let protocol = ReportProtocol::empty(TimeDelta::zero());
/// assert!(protocol.notifications.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportProtocol<T> {
    /// The computed value.
    pub result: T,
    /// Corrections applied while computing `result`, in order.
    pub notifications: Vec<Notification>,
}

impl<T> ReportProtocol<T> {
    /// Creates a protocol from a result and the log gathered for it.
    pub fn new(result: T, log: NotificationLog) -> Self {
        Self {
            result,
            notifications: log.into_vec(),
        }
    }

    /// Creates a protocol with no notifications.
    pub fn empty(result: T) -> Self {
        Self {
            result,
            notifications: Vec::new(),
        }
    }

    /// Returns true if any notification is a warning.
    pub fn has_warnings(&self) -> bool {
        self.notifications.iter().any(Notification::is_warning)
    }
}

/// A full daily report: the corrected stamps and the time worked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    /// The employee the report is for.
    pub employee_id: EmployeeId,
    /// The reported day.
    pub day: NaiveDate,
    /// The stamp sequence after all corrections.
    pub stamps: Vec<Stamp>,
    /// Total worked time.
    pub worked: TimeDelta,
}

impl DailyReport {
    /// Returns the worked time in hours, rounded to two decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// use worktime_engine::models::DailyReport;
    /// use chrono::{NaiveDate, TimeDelta};
    /// use rust_decimal::Decimal;
    ///
    /// let report = DailyReport {
    ///     employee_id: 1,
    ///     day: NaiveDate::from_ymd_opt(2016, 4, 3).unwrap(),
    ///     stamps: vec![],
    ///     worked: TimeDelta::minutes(450),
    /// };
    /// assert_eq!(report.worked_hours(), Decimal::new(750, 2)); // 7.50
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        (Decimal::new(self.worked.num_seconds(), 0) / Decimal::new(3600, 0)).round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_takes_log_entries() {
        let mut log = NotificationLog::new();
        log.warn("First In-stamp was not found.");
        let protocol = ReportProtocol::new(TimeDelta::hours(1), log);
        assert_eq!(protocol.notifications.len(), 1);
        assert!(protocol.has_warnings());
    }

    #[test]
    fn test_messages_alone_are_not_warnings() {
        let mut log = NotificationLog::new();
        log.note("Begin of target day was added as first In-stamp.");
        let protocol = ReportProtocol::new(TimeDelta::hours(2), log);
        assert_eq!(protocol.notifications.len(), 1);
        assert!(!protocol.has_warnings());
    }

    #[test]
    fn test_worked_hours_rounds_to_two_places() {
        let report = DailyReport {
            employee_id: 1,
            day: NaiveDate::from_ymd_opt(2016, 4, 3).unwrap(),
            stamps: vec![],
            worked: TimeDelta::seconds(3600 * 8 + 20),
        };
        assert_eq!(report.worked_hours(), Decimal::new(801, 2));
    }
}
