//! Same-kind run correction.
//!
//! This module repairs adjacent stamps of the same kind within one day:
//! duplicated recordings of one event are merged, and two genuine events of
//! the same kind get a marker of that kind at their midpoint.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::error::{ReportError, ReportResult};
use crate::models::{EmployeeId, NotificationLog, Stamp};

/// Corrects same-kind anomalies in one day's stamps.
///
/// The stamps must belong to `employee_id`, fall on `day` and be ordered by
/// time; otherwise `InvalidArgument` is returned and nothing is logged.
///
/// Adjacent pairs are scanned once from left to right:
/// - same kind, same time: the second stamp is dropped as a duplicate and the
///   first is compared with its new neighbour;
/// - same kind, different times: a stamp of that kind is inserted at the
///   midpoint (rounded down) and the scan continues after it.
///
/// The corrector does not force In/Out alternation.
///
/// # Examples
///
/// ```
/// use worktime_engine::correction::correct_sequence;
/// use worktime_engine::models::{NotificationLog, Stamp};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2016, 4, 3).unwrap();
/// let stamps = vec![
///     Stamp::clock_out(1, day.and_hms_opt(9, 0, 0).unwrap()),
///     Stamp::clock_out(1, day.and_hms_opt(10, 0, 0).unwrap()),
/// ];
///
/// let mut log = NotificationLog::new();
/// let corrected = correct_sequence(stamps, 1, day, &mut log).unwrap();
///
/// assert_eq!(corrected.len(), 3);
/// assert_eq!(corrected[1], Stamp::clock_out(1, day.and_hms_opt(9, 30, 0).unwrap()));
/// ```
pub fn correct_sequence(
    mut stamps: Vec<Stamp>,
    employee_id: EmployeeId,
    day: NaiveDate,
    log: &mut NotificationLog,
) -> ReportResult<Vec<Stamp>> {
    validate_day_sequence(&stamps, employee_id, day)?;

    let input_len = stamps.len();
    let mut merged = 0usize;
    let mut inserted = 0usize;
    let mut i = 0;

    // every step either drops a stamp or moves past an original one
    for _ in 0..input_len {
        if i + 1 >= stamps.len() {
            break;
        }

        let (a, b) = (stamps[i], stamps[i + 1]);
        if a.kind != b.kind {
            i += 1;
            continue;
        }

        if a.time == b.time {
            stamps.remove(i + 1);
            merged += 1;
            log.note(format!(
                "Duplicate {}-stamp at {} was merged.",
                a.kind,
                a.time.time()
            ));
            continue;
        }

        let middle = midpoint(a.time, b.time);
        if middle == a.time {
            log.warn(format!(
                "{kind}-stamps at {} and {} are too close to split.",
                a.time.time(),
                b.time.time(),
                kind = a.kind
            ));
            i += 1;
            continue;
        }

        warn!(
            employee_id,
            %day,
            kind = %a.kind,
            first = %a.time,
            second = %b.time,
            "Consecutive stamps of the same kind"
        );
        log.warn(format!(
            "Two consecutive {kind}-stamps were found at {} and {}.",
            a.time.time(),
            b.time.time(),
            kind = a.kind
        ));
        log.note(format!(
            "{}-stamp was added at {} between them.",
            a.kind,
            middle.time()
        ));
        stamps.insert(i + 1, Stamp::new(employee_id, a.kind, middle));
        inserted += 1;
        i += 2;
    }

    debug!(
        employee_id,
        %day,
        input = input_len,
        output = stamps.len(),
        merged,
        inserted,
        "Stamp sequence corrected"
    );

    Ok(stamps)
}

/// Midpoint of two times, rounded down.
fn midpoint(first: NaiveDateTime, second: NaiveDateTime) -> NaiveDateTime {
    first + (second - first) / 2
}

/// Checks that `stamps` form one employee's day, ordered by time.
fn validate_day_sequence(
    stamps: &[Stamp],
    employee_id: EmployeeId,
    day: NaiveDate,
) -> ReportResult<()> {
    if let Some(stamp) = stamps.iter().find(|s| s.employee_id != employee_id) {
        return Err(ReportError::InvalidArgument {
            argument: "stamps".to_string(),
            message: format!(
                "stamp at {} belongs to employee {}, expected {}",
                stamp.time, stamp.employee_id, employee_id
            ),
        });
    }

    if let Some(stamp) = stamps.iter().find(|s| s.day() != day) {
        return Err(ReportError::InvalidArgument {
            argument: "stamps".to_string(),
            message: format!("stamp at {} is not on {}", stamp.time, day),
        });
    }

    if let Some(pair) = stamps.windows(2).find(|w| w[0].time > w[1].time) {
        return Err(ReportError::InvalidArgument {
            argument: "stamps".to_string(),
            message: format!(
                "not ordered by time: {} comes before {}",
                pair[0].time, pair[1].time
            ),
        });
    }

    Ok(())
}
