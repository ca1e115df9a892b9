//! Request types for the worktime engine API.
//!
//! This module defines the JSON request structures for the `/reports/daily`
//! endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeId, Stamp, StampKind};
use crate::source::InMemoryStampsSource;

/// Request body for the `/reports/daily` endpoint.
///
/// `stamps` holds every stamp the caller has for the employee around the
/// reported day, in any order. Stamps of the following day are needed to
/// close a shift that ran past midnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReportRequest {
    /// The employee to report on.
    pub employee_id: EmployeeId,
    /// The reported day.
    pub day: NaiveDate,
    /// Recorded stamps.
    #[serde(default)]
    pub stamps: Vec<StampRequest>,
}

/// A stamp in a report request.
///
/// The employee defaults to the one named by the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StampRequest {
    /// The employee the stamp was recorded for.
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
    /// In or out.
    pub kind: StampKind,
    /// When the stamp was recorded.
    pub time: NaiveDateTime,
}

impl DailyReportRequest {
    /// Builds a stamps source holding the request's stamps.
    pub fn to_source(&self) -> InMemoryStampsSource {
        InMemoryStampsSource::from_stamps(self.stamps.iter().map(|s| {
            Stamp::new(s.employee_id.unwrap_or(self.employee_id), s.kind, s.time)
        }))
    }
}
