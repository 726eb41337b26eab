// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    DatabaseError(sqlx::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
        }
    }
}

/// Inner object of the JSON error body
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: u16,
}

/// JSON error response structure: `{error: {message, status}, message}`
///
/// The message is repeated at the top level; every handler surfaces
/// failures in this one shape.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database operation failed".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: ErrorBody {
                message: message.clone(),
                status: status.as_u16(),
            },
            message,
        };

        (status, Json(error_response)).into_response()
    }
}
