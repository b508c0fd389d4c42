//! Unified error handling for the HTTP boundary.
//!
//! Provides a single error type that converts into Axum responses.
//! Client errors carry a code and message; anything internal collapses
//! into one opaque envelope so no storage or runtime detail leaks out.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, FieldViolation};
use serde::Serialize;
use thiserror::Error;

/// Message returned to clients for every unhandled failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("{} field(s) failed validation", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Unsupported API version: {0}")]
    UnsupportedApiVersion(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for client errors
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldViolation>,
}

/// Error response body for unhandled failures
#[derive(Debug, Serialize)]
struct InternalErrorResponse {
    error: &'static str,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) | AppError::InvalidFields(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::UnsupportedApiVersion(_) => "UNSUPPORTED_API_VERSION",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_)
            | AppError::InvalidFields(_)
            | AppError::BadRequest(_)
            | AppError::UnsupportedApiVersion(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::InvalidFields(violations) => violations
                .iter()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            AppError::UnsupportedApiVersion(version) => format!(
                "The HTTP resource does not support the API version '{}'",
                version
            ),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                INTERNAL_ERROR_MESSAGE.to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    /// Check whether this error is hidden behind the generic 500 envelope
    pub fn is_internal(&self) -> bool {
        self.status().is_server_error()
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

/// The opaque 500 response shared by error conversion and panic recovery.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(InternalErrorResponse {
            error: INTERNAL_ERROR_MESSAGE,
        }),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            // Logs the underlying cause
            self.user_message();
            return internal_error_response();
        }

        let status = self.status();
        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }

        let code = self.code();
        let message = self.user_message();
        let fields = match self {
            AppError::InvalidFields(violations) => violations,
            _ => Vec::new(),
        };
        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message,
                fields,
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidFields(violations) => AppError::InvalidFields(violations),
            DomainError::NotFound(_) => AppError::NotFound,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn internal_errors_use_the_opaque_envelope() {
        let response = AppError::internal("connection pool exhausted").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            json!({ "error": INTERNAL_ERROR_MESSAGE })
        );
    }

    #[tokio::test]
    async fn not_found_has_an_empty_body() {
        let response = AppError::NotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn invalid_fields_list_every_violation() {
        let response = AppError::InvalidFields(vec![
            FieldViolation::new("email", "Invalid Email Address"),
            FieldViolation::new("phone", "Invalid Phone Number"),
        ])
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid Email Address, Invalid Phone Number",
                    "fields": [
                        { "field": "email", "message": "Invalid Email Address" },
                        { "field": "phone", "message": "Invalid Phone Number" }
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn bad_request_omits_empty_fields() {
        let response = AppError::bad_request("Customer ID mismatch").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": {
                    "code": "BAD_REQUEST",
                    "message": "Customer ID mismatch"
                }
            })
        );
    }

    #[test]
    fn domain_errors_map_onto_app_errors() {
        assert!(matches!(
            AppError::from(DomainError::not_found("Customer")),
            AppError::NotFound
        ));
        assert!(matches!(
            AppError::from(DomainError::InvalidFields(vec![FieldViolation::new(
                "email",
                "Invalid Email Address"
            )])),
            AppError::InvalidFields(v) if v.len() == 1
        ));
        assert_eq!(
            AppError::UnsupportedApiVersion("2.0".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn option_ext_maps_none_to_not_found() {
        assert!(matches!(None::<u8>.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(7).ok_or_not_found().unwrap(), 7);
    }
}
