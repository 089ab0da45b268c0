//! Shared HTTP error payload and status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::ErrorCode;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_FAILED", message)
    }
}

/// Maps a module error code to the HTTP status of its response.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::InvalidDateRange => StatusCode::BAD_REQUEST,
        ErrorCode::TripNotFound | ErrorCode::ParticipantNotFound => StatusCode::NOT_FOUND,
        ErrorCode::DatabaseError | ErrorCode::EmailError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Builds the error response for a module error's code and message.
pub fn error_response(code: ErrorCode, message: String) -> Response {
    (
        status_for(code),
        Json(ErrorResponse::new(code.to_string(), message)),
    )
        .into_response()
}

/// 400 response for a malformed ID path parameter.
pub fn invalid_id_response(param: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!(
            "Invalid {}: must be a UUID",
            param
        ))),
    )
        .into_response()
}
