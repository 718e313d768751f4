//! Response types for the personnel manager API.
//!
//! This module defines the error response structures and maps service
//! errors onto HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::models::EmployeeId;

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

    /// Creates a missing field error response.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_details(
            "VALIDATION_ERROR",
            format!("missing field: {}", field),
            format!("Required field '{}' was not provided in the request", field),
        )
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(kind: &str, id: EmployeeId) -> Self {
        Self::new(
            "EMPLOYEE_NOT_FOUND",
            format!("No {} employee with id {}", kind, id),
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// Creates a 404 response.
    pub fn not_found(error: ApiError) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::BusinessRuleViolation(rule) => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("BUSINESS_RULE_VIOLATION", rule.message()),
            },
            ServiceError::InvalidArgument { argument } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "INVALID_ARGUMENT",
                    "Internal error",
                    format!("missing argument: {}", argument),
                ),
            },
            ServiceError::Repository(err) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("REPOSITORY_ERROR", "Storage error", err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BusinessRule, RepositoryError};

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_business_rule_violation_is_unprocessable() {
        let response: ApiErrorResponse =
            ServiceError::BusinessRuleViolation(BusinessRule::MonthlySalary).into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "BUSINESS_RULE_VIOLATION");
        assert_eq!(response.error.message, "Salaire mensuel invalide");
    }

    #[test]
    fn test_invalid_argument_is_internal_error() {
        let response: ApiErrorResponse = ServiceError::InvalidArgument {
            argument: "employee",
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "INVALID_ARGUMENT");
    }

    #[test]
    fn test_repository_error_keeps_details() {
        let response: ApiErrorResponse = ServiceError::Repository(RepositoryError::Unavailable {
            message: "lock poisoned".to_string(),
        })
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.error.details.as_deref(),
            Some("employee store unavailable: lock poisoned")
        );
    }

    #[test]
    fn test_employee_not_found_message() {
        let error = ApiError::employee_not_found("hourly", 42);
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
        assert_eq!(error.message, "No hourly employee with id 42");
    }
}
