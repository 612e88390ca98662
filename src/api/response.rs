//! Response types for the Counter-Proposal Engine API.
//!
//! This module defines the proposal response body, the error response
//! structures, and the error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::Positioning;
use crate::error::EngineError;
use crate::models::{CompetingOffer, CounterProposal, Employee};

/// Response body for the `/proposal` endpoint.
///
/// Carries the computed proposal (the placeholder when preconditions are
/// unmet) together with the positioning context the comparison views
/// render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalResponse {
    /// The analyzed employee.
    pub employee: Employee,
    /// The competing offer, fully derived from the raw entry.
    pub offer: CompetingOffer,
    /// The computed counter proposal.
    pub proposal: CounterProposal,
    /// Positioning of the employee's current salary.
    pub current_position: Positioning,
    /// Positioning of the competing offer's base pay.
    pub offer_position: Positioning,
    /// The offer's CTC increase over the current package, in percent.
    pub offer_increase_pct: Decimal,
    /// CTCs converted to USD at the fixed display rate.
    pub usd: UsdSummary,
}

/// CTC figures converted to USD for the comparison tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsdSummary {
    /// The employee's current CTC in USD.
    pub current_ctc: Decimal,
    /// The competing offer's CTC in USD.
    pub offer_ctc: Decimal,
    /// The proposed CTC in USD.
    pub proposed_ctc: Decimal,
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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: &str) -> Self {
        Self::with_details(
            "EMPLOYEE_NOT_FOUND",
            format!("Employee not found: {}", id),
            format!("No employee with id '{}' exists in the directory", id),
        )
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
            EngineError::DatasetNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATASET_ERROR",
                    "Dataset error",
                    format!("Dataset file not found: {}", path),
                ),
            },
            EngineError::DatasetParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "DATASET_ERROR",
                    "Dataset parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::employee_not_found(&id),
            },
            EngineError::RangeNotFound { job_title, level } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RANGE_NOT_FOUND",
                    format!(
                        "No compensation range for '{}' at level {}",
                        job_title, level
                    ),
                    "The requested job title has no band at that level in the taxonomy",
                ),
            },
            EngineError::InvalidOffer { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_OFFER",
                    format!("Invalid competing offer: {}", message),
                    "The competing offer data contains invalid information",
                ),
            },
        }
    }
}
