//! Configuration types for stamp correction.
//!
//! This module contains the strongly-typed policy that is deserialized from
//! YAML configuration files.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

/// Times of day and switches that drive boundary correction.
///
/// Every field is optional in YAML; missing fields take their default.
///
/// # Example
///
/// ```
/// use worktime_engine::config::CorrectionPolicy;
/// use chrono::NaiveTime;
///
/// let policy = CorrectionPolicy::default();
/// assert_eq!(policy.next_day_cutoff, NaiveTime::from_hms_opt(4, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorrectionPolicy {
    /// Time of a synthesized first In-stamp.
    pub day_start: NaiveTime,
    /// Time of a synthesized last Out-stamp.
    pub day_end: NaiveTime,
    /// Latest time on the following day at which an Out-stamp is still
    /// taken as the end of the reported day's shift.
    pub next_day_cutoff: NaiveTime,
    /// Fail with `InconsistentSequence` instead of aggregating best-effort
    /// when the corrected stamps do not alternate.
    pub strict_alternation: bool,
}

impl Default for CorrectionPolicy {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::MIN,
            day_end: NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN),
            next_day_cutoff: NaiveTime::from_hms_opt(4, 0, 0).unwrap_or(NaiveTime::MIN),
            strict_alternation: false,
        }
    }
}

impl CorrectionPolicy {
    /// Beginning of `day`, used for a synthesized first In-stamp.
    pub fn day_start_of(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.day_start)
    }

    /// End of `day`, used for a synthesized last Out-stamp.
    pub fn day_end_of(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.day_end)
    }

    /// Cutoff on `next_day` for borrowing its first Out-stamp.
    pub fn cutoff_on(&self, next_day: NaiveDate) -> NaiveDateTime {
        next_day.and_time(self.next_day_cutoff)
    }
}
