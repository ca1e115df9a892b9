//! Response types for the worktime engine API.
//!
//! This module defines the report and error response structures and maps
//! engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ReportError;
use crate::models::{DailyReport, EmployeeId, Notification, ReportProtocol, Stamp};

/// Body of a successful `/reports/daily` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReportResponse {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// The employee reported on.
    pub employee_id: EmployeeId,
    /// The reported day.
    pub day: NaiveDate,
    /// Worked time in whole seconds.
    pub worked_seconds: i64,
    /// Worked time in hours, two decimal places.
    pub worked_hours: Decimal,
    /// The corrected stamps the worked time was computed from.
    pub stamps: Vec<Stamp>,
    /// Every correction applied to the recorded stamps.
    pub notifications: Vec<Notification>,
    /// Time spent computing the report, in microseconds.
    pub duration_us: u64,
}

impl DailyReportResponse {
    /// Builds the response body from a report protocol.
    pub fn new(protocol: ReportProtocol<DailyReport>, duration_us: u64) -> Self {
        let worked_hours = protocol.result.worked_hours();
        let report = protocol.result;

        Self {
            report_id: Uuid::new_v4(),
            employee_id: report.employee_id,
            day: report.day,
            worked_seconds: report.worked.num_seconds(),
            worked_hours,
            stamps: report.stamps,
            notifications: protocol.notifications,
            duration_us,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ReportError> for ApiErrorResponse {
    fn from(error: ReportError) -> Self {
        let message = error.to_string();
        match error {
            ReportError::InvalidArgument { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ARGUMENT",
                    message,
                    "The stamps do not form one employee's day ordered by time",
                ),
            },
            ReportError::InconsistentSequence { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INCONSISTENT_SEQUENCE",
                    message,
                    "Corrected stamps do not alternate between In and Out",
                ),
            },
            ReportError::UpstreamFailure { source, .. } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details("UPSTREAM_FAILURE", message, source.to_string()),
            },
            ReportError::ConfigNotFound { .. }
            | ReportError::ConfigParseError { .. }
            | ReportError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
