//! Response types for the Site Labor Ledger API.
//!
//! This module defines the success payloads, the error response structure,
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AggregationResult, EmployeeTimeCard, JobRollup, ProjectRollup};

/// Response body for `POST /period`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodResponse {
    /// The 14 dates of the period.
    pub dates: Vec<String>,
}

/// Response body for `POST /time-cards/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeCardsResponse {
    /// The new time card snapshot.
    pub time_cards: Vec<EmployeeTimeCard>,
}

/// Response body for `POST /projects/{project_id}/report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The dates of the reported pay period.
    pub period: Vec<String>,
    /// Payroll, task cost, alerts and invoice lines for the period.
    pub aggregation: AggregationResult,
    /// Per-job cost and progress.
    pub jobs: Vec<JobRollup>,
    /// Project cost against the quote.
    pub project: ProjectRollup,
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidDate { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}'", value),
                    message,
                ),
            },
            EngineError::ProjectNotFound { project_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "PROJECT_NOT_FOUND",
                    format!("Project not found: {}", project_id),
                ),
            },
            EngineError::InvalidRecord {
                entity,
                id,
                message,
            } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_RECORD",
                    format!("Invalid {} '{}'", entity, id),
                    message,
                ),
            },
            EngineError::AmountOverflow { context } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "AMOUNT_OVERFLOW",
                    "Amount out of range",
                    format!("Overflow in {}", context),
                ),
            },
        }
    }
}
