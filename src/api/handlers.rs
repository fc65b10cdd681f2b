//! HTTP request handlers for the payroll API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Local;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{SalaryCalculator, summarize_period};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::PayrollReport;

use super::request::{PeriodRequest, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/salaries", post(salaries_handler))
        .route("/reports/period", post(period_report_handler))
        .with_state(state)
}

/// Handler for POST /salaries.
///
/// Calculates one business day's payroll report.
async fn salaries_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match calculate_day(&request, state.config()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                date = %request.date,
                records = request.records.len(),
                employees = report.results.len(),
                total_salary = %report.totals.total_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Salary calculation completed successfully"
            );
            json_response(StatusCode::OK, &report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Salary calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /reports/period.
///
/// Summarizes payroll for every business day in a period.
async fn period_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    match summarize_period(&request.input(), state.config().config(), today) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                start_date = %request.period.start_date,
                end_date = %request.period.end_date,
                days = summary.daily.len(),
                total_salary = %summary.totals.total_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Period report completed successfully"
            );
            json_response(StatusCode::OK, &summary)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Period report failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the calculator over one day, using the request's settings when given
/// and the configured version for the date otherwise.
fn calculate_day(request: &SalaryRequest, config: &ConfigLoader) -> EngineResult<PayrollReport> {
    let settings = match &request.settings {
        Some(settings) => {
            settings.validate()?;
            settings
        }
        None => config.settings_for(request.date)?,
    };
    for record in &request.records {
        record.validate()?;
    }

    let mut calculator =
        SalaryCalculator::new(settings, &request.records, &request.roles, &request.employees);
    if let Some(overrides) = &request.minimum_override {
        calculator = calculator.with_minimum_override(overrides);
    }

    Ok(calculator.calculate_report(request.date))
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message
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
    json_response(StatusCode::BAD_REQUEST, &error)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
