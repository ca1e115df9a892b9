//! HTTP request handlers for the worktime engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::reports::DailyReportsManager;

use super::request::DailyReportRequest;
use super::response::{ApiError, ApiErrorResponse, DailyReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/daily", post(daily_report_handler))
        .with_state(state)
}

/// Handler for POST /reports/daily endpoint.
///
/// Corrects the submitted stamps for the requested day and returns the
/// worked time with its notifications.
async fn daily_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let source = request.to_source();
    let manager = DailyReportsManager::with_policy(&source, state.config().policy().clone());

    match manager.daily_report(request.employee_id, request.day) {
        Ok(protocol) => {
            let duration_us = u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX);
            let response = DailyReportResponse::new(protocol, duration_us);
            info!(
                correlation_id = %correlation_id,
                report_id = %response.report_id,
                employee_id = response.employee_id,
                day = %response.day,
                worked_seconds = response.worked_seconds,
                notifications = response.notifications.len(),
                duration_us,
                "Daily report completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Daily report failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
