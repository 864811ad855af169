//! HTTP request handlers for the Site Labor Ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    AggregationInput, aggregate, generate_period, rollup_jobs, rollup_project, update_entry,
};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::scope::ProjectScope;

use super::request::{AggregateRequest, PeriodRequest, ReportRequest, UpdateEntryRequest};
use super::response::{
    ApiError, ApiErrorResponse, PeriodResponse, ProjectReport, TimeCardsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/period", post(period_handler))
        .route("/aggregate", post(aggregate_handler))
        .route("/time-cards/update", post(update_entry_handler))
        .route("/projects/:project_id/report", post(report_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
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
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /period.
///
/// Returns the 14 dates of the pay period starting at `start_date`.
async fn period_handler(payload: Result<Json<PeriodRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing period request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match generate_period(request.start_date) {
        Ok(dates) => {
            info!(
                correlation_id = %correlation_id,
                start_date = %request.start_date,
                "Period generated"
            );
            json_response(StatusCode::OK, PeriodResponse { dates })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Period generation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /aggregate.
///
/// Runs the aggregation over caller-supplied records. Callers narrow
/// employees and tasks to a project before calling.
async fn aggregate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AggregateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing aggregation request");

    let input: AggregationInput = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match aggregate(&input, state.config().settings()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employees = result.payroll_summary.len(),
                tasks = result.task_map.len(),
                alerts = result.budget_alerts.len(),
                net_pay = ?result.total_net_pay(),
                duration_us = start_time.elapsed().as_micros(),
                "Aggregation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Aggregation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /time-cards/update.
///
/// Applies one field change and returns the new snapshot. The request's
/// snapshot is not modified in place.
async fn update_entry_handler(
    payload: Result<Json<UpdateEntryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing time card update");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let time_cards = update_entry(
        &request.time_cards,
        &request.employee_id,
        request.date,
        request.update,
    );
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        date = %request.date,
        "Time card updated"
    );
    json_response(StatusCode::OK, TimeCardsResponse { time_cards })
}

/// Handler for POST /projects/{project_id}/report.
///
/// Aggregates the stored data of one project over a generated pay period
/// and adds job and project rollups.
async fn report_handler(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        project_id = %project_id,
        "Processing project report request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match build_report(state.config(), &project_id, request) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                project_id = %project_id,
                labor_cost = %report.project.labor_cost,
                margin = %report.project.margin,
                duration_us = start_time.elapsed().as_micros(),
                "Project report generated"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                project_id = %project_id,
                error = %err,
                "Project report failed"
            );
            error_response(err.into())
        }
    }
}

/// Builds the full report for one project.
fn build_report(
    config: &ConfigLoader,
    project_id: &str,
    request: ReportRequest,
) -> EngineResult<ProjectReport> {
    let scope = ProjectScope::new(config.dataset(), project_id)?;
    let period = generate_period(request.start_date)?;
    let aggregation = aggregate(&scope.aggregation_input(period.clone()), config.settings())?;
    let jobs = rollup_jobs(&scope.jobs, &aggregation.task_map)?;
    let project = rollup_project(&scope.project, &jobs)?;

    Ok(ProjectReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period,
        aggregation,
        jobs,
        project,
    })
}
