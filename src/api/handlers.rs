//! HTTP request handlers for the personnel manager API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{EmployeeId, HourlyEmployee, SalariedEmployee};

use super::request::{MonthQuery, NameQuery, RegisterHourlyRequest, RegisterSalariedRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler))
        .route(
            "/employees/hourly",
            get(find_hourly_by_name_handler).post(register_hourly_handler),
        )
        .route("/employees/hourly/:id", get(find_hourly_handler))
        .route(
            "/employees/hourly/:id/pay-records",
            get(hourly_pay_records_handler),
        )
        .route("/employees/salaried", post(register_salaried_handler))
        .route("/employees/salaried/:id", get(find_salaried_handler))
        .route(
            "/employees/salaried/:id/pay-records",
            get(salaried_pay_records_handler),
        )
        .with_state(state)
}

type HandlerResult = Result<Response, ApiErrorResponse>;

/// Maps a JSON body rejection onto an API error.
fn json_rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
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
    ApiErrorResponse::bad_request(error)
}

fn query_rejection_error(rejection: QueryRejection) -> ApiErrorResponse {
    ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> HandlerResult {
    let employees = state.service().list_all_employees()?;
    Ok((StatusCode::OK, Json(employees)).into_response())
}

/// Handler for POST /employees/hourly.
async fn register_hourly_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterHourlyRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hourly registration");

    let Json(request) = payload.map_err(|r| json_rejection_error(r, correlation_id))?;
    if let Some(field) = request.blank_field() {
        warn!(correlation_id = %correlation_id, field, "Required field is blank");
        return Err(ApiErrorResponse::bad_request(ApiError::missing_field(field)));
    }

    let employee: HourlyEmployee = request.into();
    match state.service().register_hourly(Some(employee)) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "Hourly employee registered");
            Ok(StatusCode::CREATED.into_response())
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Hourly registration rejected");
            Err(err.into())
        }
    }
}

/// Handler for POST /employees/salaried.
async fn register_salaried_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterSalariedRequest>, JsonRejection>,
) -> HandlerResult {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salaried registration");

    let Json(request) = payload.map_err(|r| json_rejection_error(r, correlation_id))?;
    if let Some(field) = request.blank_field() {
        warn!(correlation_id = %correlation_id, field, "Required field is blank");
        return Err(ApiErrorResponse::bad_request(ApiError::missing_field(field)));
    }

    let employee: SalariedEmployee = request.into();
    match state.service().register_salaried(Some(employee)) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, "Salaried employee registered");
            Ok(StatusCode::CREATED.into_response())
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Salaried registration rejected");
            Err(err.into())
        }
    }
}

/// Handler for GET /employees/hourly?name=.
async fn find_hourly_by_name_handler(
    State(state): State<AppState>,
    query: Result<Query<NameQuery>, QueryRejection>,
) -> HandlerResult {
    let Query(query) = query.map_err(query_rejection_error)?;
    let name = query
        .name
        .ok_or_else(|| ApiErrorResponse::bad_request(ApiError::missing_field("name")))?;

    match state.service().find_hourly_by_name(&name)? {
        Some(employee) => Ok((StatusCode::OK, Json(employee)).into_response()),
        None => Err(ApiErrorResponse::not_found(ApiError::new(
            "EMPLOYEE_NOT_FOUND",
            format!("No hourly employee named {}", name),
        ))),
    }
}

/// Handler for GET /employees/hourly/:id.
async fn find_hourly_handler(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> HandlerResult {
    match state.service().find_hourly_by_id(id)? {
        Some(employee) => Ok((StatusCode::OK, Json(employee)).into_response()),
        None => Err(ApiErrorResponse::not_found(ApiError::employee_not_found(
            "hourly", id,
        ))),
    }
}

/// Handler for GET /employees/salaried/:id.
async fn find_salaried_handler(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> HandlerResult {
    match state.service().find_salaried_by_id(id)? {
        Some(employee) => Ok((StatusCode::OK, Json(employee)).into_response()),
        None => Err(ApiErrorResponse::not_found(ApiError::employee_not_found(
            "salaried", id,
        ))),
    }
}

/// Handler for GET /employees/hourly/:id/pay-records.
async fn hourly_pay_records_handler(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> HandlerResult {
    let Query(query) = query.map_err(query_rejection_error)?;
    let records = state.service().hourly_pay_records(id, query.month);
    Ok((StatusCode::OK, Json(records)).into_response())
}

/// Handler for GET /employees/salaried/:id/pay-records.
async fn salaried_pay_records_handler(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> HandlerResult {
    let Query(query) = query.map_err(query_rejection_error)?;
    let records = state.service().salaried_pay_records(id, query.month);
    Ok((StatusCode::OK, Json(records)).into_response())
}
