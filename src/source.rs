//! Access to recorded stamps.
//!
//! The engine consumes stamps through the [`StampsSource`] trait and never
//! sorts them itself. [`InMemoryStampsSource`] is a ready-made source backed
//! by a map, used by the HTTP API and in tests.

use std::collections::HashMap;
use std::error::Error;

use chrono::NaiveDate;

use crate::models::{EmployeeId, Stamp};

/// Error returned by a stamps source.
pub type SourceError = Box<dyn Error + Send + Sync>;

/// Provides the stamps recorded for an employee on a day.
pub trait StampsSource {
    /// Returns the stamps recorded for `employee_id` on `day`, sorted
    /// ascending by time.
    fn stamps_for_day(
        &self,
        employee_id: EmployeeId,
        day: NaiveDate,
    ) -> Result<Vec<Stamp>, SourceError>;
}

impl<S: StampsSource + ?Sized> StampsSource for &S {
    fn stamps_for_day(
        &self,
        employee_id: EmployeeId,
        day: NaiveDate,
    ) -> Result<Vec<Stamp>, SourceError> {
        (**self).stamps_for_day(employee_id, day)
    }
}

/// A stamps source held entirely in memory.
///
/// # Example
///
/// ```
/// use worktime_engine::models::Stamp;
/// use worktime_engine::source::{InMemoryStampsSource, StampsSource};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2016, 4, 3).unwrap();
/// let source = InMemoryStampsSource::from_stamps(vec![
///     Stamp::clock_out(1, day.and_hms_opt(18, 0, 0).unwrap()),
///     Stamp::clock_in(1, day.and_hms_opt(9, 0, 0).unwrap()),
/// ]);
///
/// let stamps = source.stamps_for_day(1, day).unwrap();
/// assert!(stamps[0].is_in());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStampsSource {
    days: HashMap<(EmployeeId, NaiveDate), Vec<Stamp>>,
}

impl InMemoryStampsSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source holding the given stamps, in any order.
    pub fn from_stamps(stamps: impl IntoIterator<Item = Stamp>) -> Self {
        let mut source = Self::new();
        for stamp in stamps {
            source.insert(stamp);
        }
        source
    }

    /// Records a stamp, keeping its day ordered by time.
    pub fn insert(&mut self, stamp: Stamp) {
        let day = self.days.entry((stamp.employee_id, stamp.day())).or_default();
        // after existing stamps with the same time, so insertion order is kept
        let position = day.partition_point(|s| s.time <= stamp.time);
        day.insert(position, stamp);
    }

    /// Total number of stamps held.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Returns true if no stamps are held.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl StampsSource for InMemoryStampsSource {
    fn stamps_for_day(
        &self,
        employee_id: EmployeeId,
        day: NaiveDate,
    ) -> Result<Vec<Stamp>, SourceError> {
        Ok(self
            .days
            .get(&(employee_id, day))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_stamps_are_grouped_by_employee_and_day() {
        let source = InMemoryStampsSource::from_stamps(vec![
            Stamp::clock_in(1, make_datetime("2016-04-03 09:00:00")),
            Stamp::clock_in(2, make_datetime("2016-04-03 10:00:00")),
            Stamp::clock_out(1, make_datetime("2016-04-04 02:00:00")),
        ]);

        assert_eq!(source.len(), 3);
        assert_eq!(source.stamps_for_day(1, make_date("2016-04-03")).unwrap().len(), 1);
        assert_eq!(source.stamps_for_day(2, make_date("2016-04-03")).unwrap().len(), 1);
        assert_eq!(source.stamps_for_day(1, make_date("2016-04-04")).unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_day_is_empty() {
        let source = InMemoryStampsSource::new();
        assert!(source.is_empty());
        assert!(source.stamps_for_day(1, make_date("2016-04-03")).unwrap().is_empty());
    }

    #[test]
    fn test_insert_keeps_day_sorted() {
        let mut source = InMemoryStampsSource::new();
        source.insert(Stamp::clock_out(1, make_datetime("2016-04-03 18:00:00")));
        source.insert(Stamp::clock_in(1, make_datetime("2016-04-03 09:00:00")));
        source.insert(Stamp::clock_out(1, make_datetime("2016-04-03 12:00:00")));

        let times: Vec<_> = source
            .stamps_for_day(1, make_date("2016-04-03"))
            .unwrap()
            .iter()
            .map(|s| s.time.format("%H:%M").to_string())
            .collect();
        assert_eq!(times, vec!["09:00", "12:00", "18:00"]);
    }

    #[test]
    fn test_reference_is_a_source() {
        fn day_len<S: StampsSource>(source: S) -> usize {
            source
                .stamps_for_day(1, make_date("2016-04-03"))
                .unwrap()
                .len()
        }

        let source = InMemoryStampsSource::from_stamps(vec![Stamp::clock_in(
            1,
            make_datetime("2016-04-03 09:00:00"),
        )]);
        assert_eq!(day_len(&source), 1);
    }
}
