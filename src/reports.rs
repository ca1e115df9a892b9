//! Daily reports.
//!
//! [`DailyReportsManager`] fetches an employee's stamps for a day, runs the
//! correction pipeline over them and returns the result together with the
//! notifications describing every correction.

use chrono::{NaiveDate, TimeDelta};
use tracing::{debug, warn};

use crate::config::CorrectionPolicy;
use crate::correction::{aggregate, correct_sequence, fix_boundaries};
use crate::error::{ReportError, ReportResult};
use crate::models::{DailyReport, EmployeeId, NotificationLog, ReportProtocol, Stamp};
use crate::source::StampsSource;

/// Makes daily reports from a stamps source.
///
/// Each call builds its own stamp list and notification log, so one manager
/// can serve any number of employees and days.
///
/// # Example
///
/// ```
/// use worktime_engine::models::Stamp;
/// use worktime_engine::reports::DailyReportsManager;
/// use worktime_engine::source::InMemoryStampsSource;
/// use chrono::{NaiveDate, TimeDelta};
///
/// let day = NaiveDate::from_ymd_opt(2016, 4, 3).unwrap();
/// let source = InMemoryStampsSource::from_stamps(vec![
///     Stamp::clock_in(1, day.and_hms_opt(9, 0, 0).unwrap()),
///     Stamp::clock_out(1, day.and_hms_opt(17, 0, 0).unwrap()),
/// ]);
///
/// let manager = DailyReportsManager::new(source);
/// let protocol = manager.time_of_work_for_day(1, day).unwrap();
/// assert_eq!(protocol.result, TimeDelta::hours(8));
/// assert!(protocol.notifications.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct DailyReportsManager<S> {
    source: S,
    policy: CorrectionPolicy,
}

impl<S: StampsSource> DailyReportsManager<S> {
    /// Creates a manager using the default correction policy.
    pub fn new(source: S) -> Self {
        Self::with_policy(source, CorrectionPolicy::default())
    }

    /// Creates a manager with an explicit correction policy.
    pub fn with_policy(source: S, policy: CorrectionPolicy) -> Self {
        Self { source, policy }
    }

    /// Computes the time an employee worked on `day`.
    ///
    /// A day without stamps yields zero and no notifications. If the corrected
    /// stamps still do not alternate, the paired time is returned with a
    /// warning, or `InconsistentSequence` when the policy is strict.
    pub fn time_of_work_for_day(
        &self,
        employee_id: EmployeeId,
        day: NaiveDate,
    ) -> ReportResult<ReportProtocol<TimeDelta>> {
        let mut log = NotificationLog::new();
        let stamps = self.collect_stamps_for_daily_report(employee_id, day, &mut log)?;
        let worked = self.worked_time(&stamps, employee_id, day, &mut log)?;
        Ok(ReportProtocol::new(worked, log))
    }

    /// Returns the corrected stamps of an employee for `day`.
    pub fn corrected_stamps_for_day(
        &self,
        employee_id: EmployeeId,
        day: NaiveDate,
    ) -> ReportResult<ReportProtocol<Vec<Stamp>>> {
        let mut log = NotificationLog::new();
        let stamps = self.collect_stamps_for_daily_report(employee_id, day, &mut log)?;
        Ok(ReportProtocol::new(stamps, log))
    }

    /// Builds the full daily report: corrected stamps and worked time.
    pub fn daily_report(
        &self,
        employee_id: EmployeeId,
        day: NaiveDate,
    ) -> ReportResult<ReportProtocol<DailyReport>> {
        let mut log = NotificationLog::new();
        let stamps = self.collect_stamps_for_daily_report(employee_id, day, &mut log)?;
        let worked = self.worked_time(&stamps, employee_id, day, &mut log)?;

        let report = DailyReport {
            employee_id,
            day,
            stamps,
            worked,
        };
        Ok(ReportProtocol::new(report, log))
    }

    /// Fetches the day's stamps and runs both correction stages over them.
    fn collect_stamps_for_daily_report(
        &self,
        employee_id: EmployeeId,
        day: NaiveDate,
        log: &mut NotificationLog,
    ) -> ReportResult<Vec<Stamp>> {
        let stamps = self
            .source
            .stamps_for_day(employee_id, day)
            .map_err(|err| {
                warn!(employee_id, %day, error = %err, "Stamps source failed");
                ReportError::UpstreamFailure {
                    employee_id,
                    day,
                    source: err,
                }
            })?;

        if stamps.is_empty() {
            debug!(employee_id, %day, "No stamps recorded");
            return Ok(stamps);
        }

        let stamps = correct_sequence(stamps, employee_id, day, log)?;
        fix_boundaries(stamps, employee_id, day, &self.source, &self.policy, log)
    }

    /// Aggregates corrected stamps, handling sequences that do not alternate.
    fn worked_time(
        &self,
        stamps: &[Stamp],
        employee_id: EmployeeId,
        day: NaiveDate,
        log: &mut NotificationLog,
    ) -> ReportResult<TimeDelta> {
        let aggregation = aggregate(stamps);

        if !aggregation.is_alternating() {
            warn!(
                employee_id,
                %day,
                unpaired = aggregation.unpaired,
                "Stamps do not alternate after correction"
            );
            if self.policy.strict_alternation {
                return Err(ReportError::InconsistentSequence {
                    employee_id,
                    day,
                    unpaired: aggregation.unpaired,
                });
            }
            log.warn(format!(
                "{} stamp(s) could not be paired and were left out of the worked time.",
                aggregation.unpaired
            ));
        }

        debug!(
            employee_id,
            %day,
            pairs = aggregation.pairs,
            worked_seconds = aggregation.worked.num_seconds(),
            "Worked time aggregated"
        );

        Ok(aggregation.worked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::source::{InMemoryStampsSource, SourceError};
    use chrono::NaiveDateTime;

    const EMPLOYEE: EmployeeId = 1;

    fn target_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 4, 3).unwrap()
    }

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        target_day().and_hms_opt(hour, min, 0).unwrap()
    }

    fn next_day_at(hour: u32, min: u32) -> NaiveDateTime {
        target_day()
            .succ_opt()
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn manager(stamps: Vec<Stamp>) -> DailyReportsManager<InMemoryStampsSource> {
        DailyReportsManager::new(InMemoryStampsSource::from_stamps(stamps))
    }

    struct FailingSource;

    impl StampsSource for FailingSource {
        fn stamps_for_day(&self, _: EmployeeId, _: NaiveDate) -> Result<Vec<Stamp>, SourceError> {
            Err("database is down".into())
        }
    }

    #[test]
    fn test_empty_day_is_zero_without_notifications() {
        let protocol = manager(vec![]).time_of_work_for_day(EMPLOYEE, target_day()).unwrap();
        assert_eq!(protocol.result, TimeDelta::zero());
        assert!(protocol.notifications.is_empty());
    }

    #[test]
    fn test_regular_day() {
        let protocol = manager(vec![
            Stamp::clock_in(EMPLOYEE, at(9, 0)),
            Stamp::clock_out(EMPLOYEE, at(12, 0)),
            Stamp::clock_in(EMPLOYEE, at(15, 0)),
            Stamp::clock_out(EMPLOYEE, at(18, 0)),
        ])
        .time_of_work_for_day(EMPLOYEE, target_day())
        .unwrap();

        assert_eq!(protocol.result, TimeDelta::hours(6));
        assert!(protocol.notifications.is_empty());
    }

    #[test]
    fn test_other_employees_are_ignored() {
        let protocol = manager(vec![
            Stamp::clock_in(EMPLOYEE, at(9, 0)),
            Stamp::clock_out(EMPLOYEE, at(17, 0)),
            Stamp::clock_in(2, at(6, 0)),
        ])
        .time_of_work_for_day(EMPLOYEE, target_day())
        .unwrap();

        assert_eq!(protocol.result, TimeDelta::hours(8));
    }

    #[test]
    fn test_night_shift_borrows_next_day_out() {
        let protocol = manager(vec![
            Stamp::clock_in(EMPLOYEE, at(22, 0)),
            Stamp::clock_out(EMPLOYEE, next_day_at(3, 0)),
        ])
        .time_of_work_for_day(EMPLOYEE, target_day())
        .unwrap();

        assert_eq!(protocol.result, TimeDelta::hours(5));
        assert_eq!(protocol.notifications.len(), 2);
    }

    #[test]
    fn test_missing_out_without_next_day_uses_day_end() {
        let protocol = manager(vec![Stamp::clock_in(EMPLOYEE, at(20, 0))])
            .time_of_work_for_day(EMPLOYEE, target_day())
            .unwrap();

        assert_eq!(protocol.result, TimeDelta::seconds(4 * 3600 - 1));
        assert!(protocol.has_warnings());
    }

    #[test]
    fn test_out_run_is_corrected_then_bounded() {
        let protocol = manager(vec![
            Stamp::clock_out(EMPLOYEE, at(9, 0)),
            Stamp::clock_out(EMPLOYEE, at(10, 0)),
        ])
        .corrected_stamps_for_day(EMPLOYEE, target_day())
        .unwrap();

        assert_eq!(
            protocol.result,
            vec![
                Stamp::clock_in(EMPLOYEE, at(0, 0)),
                Stamp::clock_out(EMPLOYEE, at(9, 0)),
                Stamp::clock_out(EMPLOYEE, at(9, 30)),
                Stamp::clock_out(EMPLOYEE, at(10, 0)),
            ]
        );
    }

    #[test]
    fn test_unpaired_stamps_are_reported() {
        let protocol = manager(vec![
            Stamp::clock_out(EMPLOYEE, at(9, 0)),
            Stamp::clock_out(EMPLOYEE, at(10, 0)),
        ])
        .time_of_work_for_day(EMPLOYEE, target_day())
        .unwrap();

        // In 00:00 .. Out 09:00 is the only pair
        assert_eq!(protocol.result, TimeDelta::hours(9));
        let last = protocol.notifications.last().unwrap();
        assert_eq!(last.severity, Severity::Warning);
        assert!(last.message.starts_with("2 stamp(s)"));
    }

    #[test]
    fn test_strict_policy_rejects_unpaired_stamps() {
        let policy = CorrectionPolicy {
            strict_alternation: true,
            ..CorrectionPolicy::default()
        };
        let manager = DailyReportsManager::with_policy(
            InMemoryStampsSource::from_stamps(vec![
                Stamp::clock_in(EMPLOYEE, at(8, 0)),
                Stamp::clock_in(EMPLOYEE, at(10, 0)),
                Stamp::clock_out(EMPLOYEE, at(16, 0)),
            ]),
            policy,
        );

        let result = manager.time_of_work_for_day(EMPLOYEE, target_day());

        assert!(matches!(
            result,
            Err(ReportError::InconsistentSequence { unpaired: 2, .. })
        ));
    }

    #[test]
    fn test_daily_report_matches_time_of_work() {
        let manager = manager(vec![
            Stamp::clock_in(EMPLOYEE, at(9, 0)),
            Stamp::clock_in(EMPLOYEE, at(9, 0)),
            Stamp::clock_out(EMPLOYEE, at(16, 30)),
        ]);

        let report = manager.daily_report(EMPLOYEE, target_day()).unwrap();
        let time = manager.time_of_work_for_day(EMPLOYEE, target_day()).unwrap();

        assert_eq!(report.result.worked, time.result);
        assert_eq!(report.result.stamps.len(), 2);
        assert_eq!(report.notifications, time.notifications);
    }

    #[test]
    fn test_source_failure_is_upstream_failure() {
        let manager = DailyReportsManager::new(FailingSource);

        let result = manager.time_of_work_for_day(EMPLOYEE, target_day());

        assert!(matches!(
            result,
            Err(ReportError::UpstreamFailure { employee_id: EMPLOYEE, .. })
        ));
    }

    #[test]
    fn test_manager_over_borrowed_source() {
        let source = InMemoryStampsSource::from_stamps(vec![
            Stamp::clock_in(EMPLOYEE, at(9, 0)),
            Stamp::clock_out(EMPLOYEE, at(10, 0)),
        ]);
        let manager = DailyReportsManager::new(&source);

        assert_eq!(
            manager.time_of_work_for_day(EMPLOYEE, target_day()).unwrap().result,
            TimeDelta::hours(1)
        );
    }
}
