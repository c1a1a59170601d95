//! HTTP request handlers for the workforce decision engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler unwraps its JSON envelope, delegates to the pure analysis
//! modules, and maps the outcome to a response; no decision logic lives
//! here.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::{
    analyze_vacation_requests, calculate_annual_hours, process_query, simulate_approval,
};
use crate::error::EngineError;
use crate::export::{analysis_to_csv, hours_to_csv};

use super::request::{AnalyzeRequest, HoursRequest, QueryRequest, SimulateRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/analyze/csv", post(analyze_csv_handler))
        .route("/hours", post(hours_handler))
        .route("/hours/csv", post(hours_csv_handler))
        .route("/simulate", post(simulate_handler))
        .route("/query", post(query_handler))
        .with_state(state)
}

/// Handler for the POST /analyze endpoint.
///
/// Runs the recommendation pipeline over the supplied collections and
/// returns one analysis result per pending vacation request.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match analyze_vacation_requests(
        &request.requests,
        &request.workers,
        &request.balances,
        &request.ruleset,
        state.policy(),
    ) {
        Ok(results) => {
            info!(
                correlation_id = %correlation_id,
                requests_count = request.requests.len(),
                results_count = results.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Analysis completed successfully"
            );
            json_ok(results)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /analyze/csv endpoint.
///
/// Same input as `/analyze`, with the results flattened to CSV for the
/// reporting flow.
async fn analyze_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis export request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let exported = analyze_vacation_requests(
        &request.requests,
        &request.workers,
        &request.balances,
        &request.ruleset,
        state.policy(),
    )
    .and_then(|results| analysis_to_csv(&results));

    match exported {
        Ok(csv) => {
            info!(
                correlation_id = %correlation_id,
                bytes = csv.len(),
                "Analysis export completed successfully"
            );
            csv_ok(csv)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /hours endpoint.
///
/// Calculates the annual hours balance for every supplied worker.
async fn hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<HoursRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hours request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match calculate_annual_hours(&request.workers, &request.reports, state.policy()) {
        Ok(results) => {
            info!(
                correlation_id = %correlation_id,
                workers_count = request.workers.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Hours calculation completed successfully"
            );
            json_ok(results)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /hours/csv endpoint.
async fn hours_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<HoursRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hours export request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let exported = calculate_annual_hours(&request.workers, &request.reports, state.policy())
        .and_then(|results| hours_to_csv(&results));

    match exported {
        Ok(csv) => {
            info!(
                correlation_id = %correlation_id,
                bytes = csv.len(),
                "Hours export completed successfully"
            );
            csv_ok(csv)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /simulate endpoint.
///
/// Previews the effect of approving a batch of requests together.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match simulate_approval(
        &request.request_ids,
        &request.requests,
        &request.workers,
        state.policy(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                batch_size = request.request_ids.len(),
                conflicts = result.conflicts.len(),
                success = result.success,
                duration_us = start_time.elapsed().as_micros(),
                "Simulation completed successfully"
            );
            json_ok(result)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /query endpoint.
///
/// Interpretation never fails; unanswerable questions come back as the
/// low-confidence fallback, so this handler always returns 200 once the
/// envelope parses.
async fn query_handler(
    State(state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing query request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let response = process_query(
        &request.text,
        &request.workers,
        &request.requests,
        &request.reports,
        state.policy(),
    );

    info!(
        correlation_id = %correlation_id,
        confidence = response.confidence,
        duration_us = start_time.elapsed().as_micros(),
        "Query processed"
    );
    json_ok(response)
}

/// Maps a JSON extraction rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps an engine error to its response, logging the failure.
fn engine_error_response(correlation_id: Uuid, error: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn json_ok<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn csv_ok(body: String) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], body).into_response()
}
