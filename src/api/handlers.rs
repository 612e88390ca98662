//! HTTP request handlers for the Counter-Proposal Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    INR_PER_USD, apply_edit, calculate_positioning, recommend, seed_proposal, to_usd,
};
use crate::directory::{current_range_for, promotion_ranges_for, search_employees};
use crate::error::EngineError;
use crate::models::{CompetingOffer, CounterProposal};

use super::request::{CustomProposalRequest, ProposalRequest, ProposalState};
use super::response::{ApiError, ApiErrorResponse, ProposalResponse, UsdSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id", get(get_employee_handler))
        .route("/ranges", get(list_ranges_handler))
        .route("/proposal", post(proposal_handler))
        .route("/proposal/custom", post(custom_proposal_handler))
        .with_state(state)
}

/// Query parameters for the employee listing.
#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Handler for GET /employees.
///
/// Without `q` returns the full directory; with `q` returns the search
/// matches (an empty query matches nothing, as in the dashboard's search
/// box).
async fn list_employees_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let directory = state.directory();
    let employees = match params.q.as_deref() {
        Some(query) => search_employees(directory.employees(), query)
            .into_iter()
            .cloned()
            .collect(),
        None => directory.employees().to_vec(),
    };
    Json(employees)
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.directory().get_employee(&id) {
        Ok(employee) => Json(employee.clone()).into_response(),
        Err(err) => {
            warn!(employee_id = %id, "Employee lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /ranges.
async fn list_ranges_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.directory().ranges().to_vec())
}

/// Handler for POST /proposal.
///
/// Computes the counter proposal for the selected strategy and wraps it
/// with the positioning context the comparison views render. Unmet
/// preconditions (no matching range, empty offer) produce the
/// placeholder proposal rather than an error.
async fn proposal_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProposalRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing proposal request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let employee = match state.directory().get_employee(&request.employee_id) {
        Ok(employee) => employee.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                "Employee not found"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let offer = CompetingOffer::from_inputs(&request.offer);
    let ranges = state.directory().ranges();
    let current_range = current_range_for(ranges, &employee);

    let promotion_range = match &request.promotion_job_title {
        None => None,
        Some(title) => {
            let candidate = current_range.and_then(|range| {
                promotion_ranges_for(ranges, range)
                    .into_iter()
                    .find(|r| &r.job_title == title)
            });
            match candidate {
                Some(range) => Some(range),
                None => {
                    warn!(
                        correlation_id = %correlation_id,
                        promotion_job_title = %title,
                        "Promotion range not found"
                    );
                    let level = current_range
                        .and_then(|r| r.numeric_level())
                        .map(|l| (l + 1).to_string())
                        .unwrap_or_else(|| "?".to_string());
                    return ApiErrorResponse::from(EngineError::RangeNotFound {
                        job_title: title.clone(),
                        level,
                    })
                    .into_response();
                }
            }
        }
    };

    let as_of = state.as_of();
    let proposal = current_range
        .and_then(|range| {
            recommend(
                &employee,
                range,
                promotion_range,
                &offer,
                request.strategy,
                as_of,
            )
        })
        .unwrap_or_else(CounterProposal::placeholder);

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        strategy = ?request.strategy,
        proposed_ctc = %proposal.ctc,
        confidence = proposal.confidence,
        "Proposal computed"
    );

    let response = ProposalResponse {
        current_position: calculate_positioning(employee.current_salary, current_range),
        offer_position: calculate_positioning(offer.base_pay, current_range),
        offer_increase_pct: offer.increase_over(employee.ctc),
        usd: UsdSummary {
            current_ctc: to_usd(employee.ctc, INR_PER_USD),
            offer_ctc: to_usd(offer.ctc, INR_PER_USD),
            proposed_ctc: to_usd(proposal.ctc, INR_PER_USD),
        },
        employee,
        offer,
        proposal,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /proposal/custom.
///
/// Applies one field edit to a custom proposal and returns the
/// re-derived record.
async fn custom_proposal_handler(
    State(state): State<AppState>,
    payload: Result<Json<CustomProposalRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing custom proposal edit");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let employee = match state.directory().get_employee(&request.employee_id) {
        Ok(employee) => employee.clone(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                "Employee not found"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let Some(range) = current_range_for(state.directory().ranges(), &employee) else {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %employee.id,
            job_title = %employee.job_title,
            "No current range for employee"
        );
        return ApiErrorResponse::from(EngineError::RangeNotFound {
            job_title: employee.job_title.clone(),
            level: employee.level.clone(),
        })
        .into_response();
    };

    let current = request
        .proposal
        .map(ProposalState::into_proposal)
        .unwrap_or_else(|| seed_proposal(&employee, request.rationale.as_deref()));

    let proposal = apply_edit(
        &current,
        request.field,
        request.value,
        &employee,
        range,
        request.rationale.as_deref(),
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        field = ?request.field,
        ctc = %proposal.ctc,
        risk = ?proposal.risk_level,
        "Custom proposal updated"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(proposal),
    )
        .into_response()
}

/// Parses a JSON request body, mapping rejections to error responses.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;
    use crate::models::{CompensationRange, Employee};
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn dec(v: i64) -> Decimal {
        Decimal::new(v, 0)
    }

    /// Parses a decimal JSON string field (decimals travel as strings).
    fn dec_field(value: &Value, key: &str) -> Decimal {
        use std::str::FromStr;
        Decimal::from_str(value[key].as_str().unwrap()).unwrap()
    }

    fn create_test_directory() -> Directory {
        let employees = vec![Employee {
            id: "1".to_string(),
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@company.com".to_string(),
            department: "Engineering".to_string(),
            job_title: "Senior Software Engineer".to_string(),
            job_family: "Technology".to_string(),
            job_sub_family: "Software Development".to_string(),
            level: "4".to_string(),
            current_salary: dec(2_000_000),
            variable_pay: dec(200_000),
            variable_percentage: dec(10),
            ctc: dec(2_200_000),
            hire_date: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
        }];
        let ranges = vec![CompensationRange {
            job_title: "Senior Software Engineer".to_string(),
            job_family: "Technology".to_string(),
            job_sub_family: "Software Development".to_string(),
            level: "4".to_string(),
            min_salary: dec(2_000_000),
            mid_salary: dec(2_500_000),
            max_salary: dec(3_000_000),
            variable_percentage: dec(12),
        }];
        Directory::new(employees, ranges)
    }

    fn create_test_router() -> Router {
        let as_of = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        create_router(AppState::with_as_of(create_test_directory(), as_of))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_list_employees_returns_directory() {
        let (status, body) = get_json(create_test_router(), "/employees").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Priya Sharma");
    }

    #[tokio::test]
    async fn test_list_employees_with_search_query() {
        let (status, body) = get_json(create_test_router(), "/employees?q=priya").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (_, empty) = get_json(create_test_router(), "/employees?q=zzz").await;
        assert!(empty.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_employee_not_found() {
        let (status, body) = get_json(create_test_router(), "/employees/404").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_proposal_happy_path() {
        let request = json!({
            "employee_id": "1",
            "offer": {"base_pay": "2800000", "ctc": "3080000"},
            "strategy": "competitive"
        });

        let (status, body) = post_json(create_test_router(), "/proposal", request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(dec_field(&body["proposal"], "base_pay"), dec(2_500_000));
        assert_eq!(dec_field(&body["proposal"], "ctc"), dec(2_800_000));
        assert_eq!(body["proposal"]["market_position"], "Market Competitive");
        assert_eq!(dec_field(&body, "offer_increase_pct"), dec(40));
    }

    #[tokio::test]
    async fn test_proposal_without_offer_returns_placeholder() {
        let request = json!({
            "employee_id": "1",
            "strategy": "competitive"
        });

        let (status, body) = post_json(create_test_router(), "/proposal", request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(dec_field(&body["proposal"], "ctc"), Decimal::ZERO);
        assert_eq!(body["proposal"]["market_position"], "Unknown");
        assert_eq!(body["proposal"]["confidence"], 0);
    }

    #[tokio::test]
    async fn test_custom_edit_seeds_from_employee() {
        let request = json!({
            "employee_id": "1",
            "field": "base_pay",
            "value": "2500000"
        });

        let (status, body) = post_json(create_test_router(), "/proposal/custom", request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(dec_field(&body, "base_pay"), dec(2_500_000));
        assert_eq!(dec_field(&body, "variable_pay"), dec(250_000));
        assert_eq!(dec_field(&body, "ctc"), dec(2_750_000));
        assert_eq!(body["risk_level"], "low");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/proposal")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
