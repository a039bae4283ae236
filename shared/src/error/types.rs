//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with structured error code
///
/// This is the primary error type of the booking service:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable message, rendered to clients as `{ "error": message }`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create a generic not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, msg)
    }

    pub fn reservation_not_found(id: impl std::fmt::Display) -> Self {
        Self::with_message(
            ErrorCode::ReservationNotFound,
            format!("Reservation {id} cannot be found."),
        )
    }

    pub fn table_not_found(id: impl std::fmt::Display) -> Self {
        Self::with_message(
            ErrorCode::TableNotFound,
            format!("Table {id} cannot be found."),
        )
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Uniform error envelope: `{ "error": "<message>" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.message.clone(),
        }
    }
}

/// Success envelope: `{ "data": <payload> }`
///
/// The HTTP status is carried alongside but never serialized; it defaults to
/// 200 and is 201 for [`ApiResponse::created`].
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip)]
    status: StatusCode,
}

impl<T> ApiResponse<T> {
    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self {
            data,
            status: StatusCode::OK,
        }
    }

    /// 201 Created with data
    pub fn created(data: T) -> Self {
        Self {
            data,
            status: StatusCode::CREATED,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        } else {
            tracing::debug!(code = %self.code, message = %self.message, "Request rejected");
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::TableOccupied);
        assert_eq!(err.code, ErrorCode::TableOccupied);
        assert_eq!(err.message, "Table is occupied");
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::reservation_not_found(99);
        assert_eq!(err.code, ErrorCode::ReservationNotFound);
        assert_eq!(err.message, "Reservation 99 cannot be found.");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err = AppError::table_not_found(7);
        assert_eq!(err.message, "Table 7 cannot be found.");

        let err = AppError::validation("people must be a number");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);

        let err = AppError::database("disk I/O error");
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::validation("The restaurant is closed on Tuesday");
        assert_eq!(err.to_string(), "The restaurant is closed on Tuesday");
    }

    #[test]
    fn test_error_body_serialize() {
        let err = AppError::reservation_not_found(3);
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "Reservation 3 cannot be found." })
        );
    }

    #[test]
    fn test_api_response_serialize_only_data() {
        let response = ApiResponse::created(vec![1, 2]);
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"data":[1,2]}"#);
    }

    #[tokio::test]
    async fn test_app_error_into_response() {
        let response = AppError::validation("Invalid field(s): foo").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Invalid field(s): foo");
    }

    #[tokio::test]
    async fn test_api_response_into_response_status() {
        let response = ApiResponse::created("x").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = ApiResponse::ok("x").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
