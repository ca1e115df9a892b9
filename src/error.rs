//! Error types for the worktime engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the conditions that abort a report computation. Data anomalies in the
//! stamps themselves are not errors: they are corrected and reported as
//! notifications.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::EmployeeId;
use crate::source::SourceError;

/// The main error type for the worktime engine.
///
/// # Example
///
/// ```
/// use worktime_engine::error::ReportError;
///
/// let error = ReportError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// An argument passed to a correction stage had the wrong shape.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// The name of the offending argument.
        argument: String,
        /// A description of what made it invalid.
        message: String,
    },

    /// The stamps source failed to return data.
    #[error("Stamps source failed for employee {employee_id} on {day}")]
    UpstreamFailure {
        /// The employee whose stamps were requested.
        employee_id: EmployeeId,
        /// The day that was requested.
        day: NaiveDate,
        /// The error returned by the source.
        #[source]
        source: SourceError,
    },

    /// A corrected sequence still does not alternate between In and Out.
    #[error(
        "Stamps of employee {employee_id} on {day} do not alternate: {unpaired} unpaired stamp(s)"
    )]
    InconsistentSequence {
        /// The employee the report was for.
        employee_id: EmployeeId,
        /// The reported day.
        day: NaiveDate,
        /// How many stamps could not be paired.
        unpaired: usize,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
