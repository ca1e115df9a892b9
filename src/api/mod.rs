//! HTTP API module for the worktime engine.
//!
//! This module provides the REST endpoint that computes a daily report from
//! stamps submitted in the request body.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DailyReportRequest, StampRequest};
pub use response::{ApiError, ApiErrorResponse, DailyReportResponse};
pub use state::AppState;
