// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lendscore_core::RejectionReport;
use lendscore_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// Structured JSON error response for API errors.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    /// Per-rule rejection messages. Only present for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            errors: None,
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            errors: None,
            details: Some(details.into()),
        }
    }

    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            error: "Application rejected due to validation errors".to_string(),
            errors: Some(errors),
            details: None,
        }
    }
}

/// API error types that map to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Application rejected: {} validation error(s)", .0.errors.len())]
    Rejected(RejectionReport),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            ApiError::Rejected(report) => {
                tracing::info!(
                    applicant_id = %report.applicant_id,
                    error_count = report.errors.len(),
                    "Application rejected by hard validation"
                );
                (StatusCode::BAD_REQUEST, ErrorResponse::rejected(report.errors))
            }
            ApiError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details("Database error", db_err.to_string()),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Bad request", msg),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<RejectionReport> for ApiError {
    fn from(report: RejectionReport) -> Self {
        ApiError::Rejected(report)
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn extract_response(response: Response) -> (StatusCode, ErrorResponse) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        (status, error_response)
    }

    #[tokio::test]
    async fn test_rejection_returns_400_with_all_reasons() {
        let error = ApiError::Rejected(RejectionReport {
            applicant_id: "app_001".to_string(),
            errors: vec![
                "Income $15,000 below minimum threshold ($20,000)".to_string(),
                "Grade 9 invalid (must be 1-7)".to_string(),
            ],
        });
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Application rejected due to validation errors");
        let errors = body.errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("below minimum threshold"));
    }

    #[tokio::test]
    async fn test_database_error_returns_500() {
        let error = ApiError::Database(DbError::NoDataDir);
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Database error");
        assert!(body.details.is_some());
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let error = ApiError::Internal("engine state corrupted".to_string());
        let (status, body) = extract_response(error.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Internal server error");
        // Internal errors should NOT expose details to clients
        assert!(body.details.is_none());
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("Test error");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"error\":\"Test error\""));
        assert!(!json.contains("errors"));
        assert!(!json.contains("details"));

        let response = ErrorResponse::rejected(vec!["reason".to_string()]);
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"errors\":[\"reason\"]"));
    }
}
