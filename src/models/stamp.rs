//! Stamp model and related types.
//!
//! This module defines the [`Stamp`] struct and [`StampKind`] enum for
//! representing single clock-in and clock-out events of an employee.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Identifier of an employee in the stamps store.
pub type EmployeeId = i64;

/// The kind of a clock event.
///
/// # Example
///
/// ```
/// use worktime_engine::models::StampKind;
///
/// assert_eq!(StampKind::In.to_string(), "In");
/// assert_eq!(StampKind::In.opposite(), StampKind::Out);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StampKind {
    /// The employee started working.
    In,
    /// The employee stopped working.
    Out,
}

impl StampKind {
    /// Returns the other kind.
    pub fn opposite(self) -> Self {
        match self {
            StampKind::In => StampKind::Out,
            StampKind::Out => StampKind::In,
        }
    }
}

impl fmt::Display for StampKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StampKind::In => write!(f, "In"),
            StampKind::Out => write!(f, "Out"),
        }
    }
}

/// A single clock event recorded for one employee.
///
/// Stamps are plain values. Corrections never modify a stamp; they replace,
/// insert or remove whole stamps in a day's sequence.
///
/// # Example
///
/// ```
/// use worktime_engine::models::{Stamp, StampKind};
/// use chrono::NaiveDate;
///
/// let time = NaiveDate::from_ymd_opt(2016, 4, 3)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
/// let stamp = Stamp::new(1, StampKind::In, time);
/// assert_eq!(stamp, Stamp::clock_in(1, time));
/// assert_eq!(stamp.day(), NaiveDate::from_ymd_opt(2016, 4, 3).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stamp {
    /// The employee the stamp was recorded for.
    pub employee_id: EmployeeId,
    /// Whether this is a clock-in or a clock-out.
    pub kind: StampKind,
    /// When the event happened, in local time.
    pub time: NaiveDateTime,
}

impl Stamp {
    /// Creates a stamp.
    pub fn new(employee_id: EmployeeId, kind: StampKind, time: NaiveDateTime) -> Self {
        Self {
            employee_id,
            kind,
            time,
        }
    }

    /// Creates an `In` stamp.
    pub fn clock_in(employee_id: EmployeeId, time: NaiveDateTime) -> Self {
        Self::new(employee_id, StampKind::In, time)
    }

    /// Creates an `Out` stamp.
    pub fn clock_out(employee_id: EmployeeId, time: NaiveDateTime) -> Self {
        Self::new(employee_id, StampKind::Out, time)
    }

    /// Returns the calendar day the stamp falls on.
    pub fn day(&self) -> NaiveDate {
        self.time.date()
    }

    /// Returns true if this is an `In` stamp.
    pub fn is_in(&self) -> bool {
        self.kind == StampKind::In
    }

    /// Returns true if this is an `Out` stamp.
    pub fn is_out(&self) -> bool {
        self.kind == StampKind::Out
    }
}
