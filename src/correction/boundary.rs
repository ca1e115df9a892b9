//! Day boundary correction.
//!
//! A reportable day must start with an In-stamp and end with an Out-stamp.
//! This module fills in whichever end is missing: a missing start becomes
//! the beginning of the day, and a missing end is either the next day's
//! first Out-stamp (for shifts that crossed midnight) or the end of the day.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::CorrectionPolicy;
use crate::error::{ReportError, ReportResult};
use crate::models::{EmployeeId, NotificationLog, Stamp};
use crate::source::StampsSource;

/// Ensures a day's stamps start with `In` and end with `Out`.
///
/// Empty input is returned unchanged. A synthesized In-stamp never comes
/// after the first recorded stamp, and a synthesized Out-stamp never comes
/// before the last one, so the sequence stays ordered by time. The `source` is only queried when the
/// last stamp is not an Out-stamp; if that query fails the error is returned
/// as [`ReportError::UpstreamFailure`].
///
/// # Examples
///
/// ```
/// use worktime_engine::config::CorrectionPolicy;
/// use worktime_engine::correction::fix_boundaries;
/// use worktime_engine::models::{NotificationLog, Stamp};
/// use worktime_engine::source::InMemoryStampsSource;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2016, 4, 3).unwrap();
/// let next_day = day.succ_opt().unwrap();
/// let source = InMemoryStampsSource::from_stamps(vec![
///     Stamp::clock_out(1, next_day.and_hms_opt(2, 0, 0).unwrap()),
/// ]);
///
/// let stamps = vec![Stamp::clock_in(1, day.and_hms_opt(22, 0, 0).unwrap())];
/// let mut log = NotificationLog::new();
/// let fixed = fix_boundaries(stamps, 1, day, &source, &CorrectionPolicy::default(), &mut log)
///     .unwrap();
///
/// // the night shift ends with the next day's Out-stamp
/// assert_eq!(fixed[1], Stamp::clock_out(1, next_day.and_hms_opt(2, 0, 0).unwrap()));
/// ```
pub fn fix_boundaries<S: StampsSource + ?Sized>(
    mut stamps: Vec<Stamp>,
    employee_id: EmployeeId,
    day: NaiveDate,
    source: &S,
    policy: &CorrectionPolicy,
    log: &mut NotificationLog,
) -> ReportResult<Vec<Stamp>> {
    if stamps.is_empty() {
        return Ok(stamps);
    }

    if let Some(first) = stamps.first().filter(|s| !s.is_in()) {
        // never later than the stamp it precedes
        let first_in = Stamp::clock_in(employee_id, policy.day_start_of(day).min(first.time));
        warn!(employee_id, %day, "First In-stamp not found");
        log.warn("First In-stamp was not found.");
        log.note("Begin of target day was added as first In-stamp.");
        stamps.insert(0, first_in);
    }

    if let Some(last_time) = stamps.last().filter(|s| !s.is_out()).map(|s| s.time) {
        warn!(employee_id, %day, "Last Out-stamp not found");
        log.warn("Last Out-stamp was not found.");

        match borrow_next_day_out(employee_id, day, source, policy)? {
            Some(next_day_out) => {
                debug!(employee_id, %day, time = %next_day_out.time, "Borrowed next day's Out-stamp");
                log.note("First Out-stamp of next day was added as last Out-stamp.");
                stamps.push(next_day_out);
            }
            None => {
                log.note("End of target day was added as last Out-stamp.");
                let day_end = policy.day_end_of(day).max(last_time);
                stamps.push(Stamp::clock_out(employee_id, day_end));
            }
        }
    }

    Ok(stamps)
}

/// Returns the next day's first stamp if it is an Out-stamp recorded no
/// later than the policy cutoff.
fn borrow_next_day_out<S: StampsSource + ?Sized>(
    employee_id: EmployeeId,
    day: NaiveDate,
    source: &S,
    policy: &CorrectionPolicy,
) -> ReportResult<Option<Stamp>> {
    let Some(next_day) = day.succ_opt() else {
        return Ok(None);
    };

    let next_day_stamps = source
        .stamps_for_day(employee_id, next_day)
        .map_err(|err| {
            warn!(employee_id, day = %next_day, error = %err, "Stamps source failed");
            ReportError::UpstreamFailure {
                employee_id,
                day: next_day,
                source: err,
            }
        })?;

    let cutoff = policy.cutoff_on(next_day);
    Ok(next_day_stamps
        .into_iter()
        .next()
        .filter(|first| first.is_out() && first.time <= cutoff))
}
