//! Activity-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, TripId};

/// Errors surfaced by activity operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityError {
    /// The owning trip was not found.
    TripNotFound(TripId),
    /// Activity date falls outside the trip's span.
    InvalidDateRange(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ActivityError {
    pub fn trip_not_found(id: TripId) -> Self {
        ActivityError::TripNotFound(id)
    }
    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        ActivityError::InvalidDateRange(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ActivityError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ActivityError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ActivityError::TripNotFound(_) => ErrorCode::TripNotFound,
            ActivityError::InvalidDateRange(_) => ErrorCode::InvalidDateRange,
            ActivityError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ActivityError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ActivityError::TripNotFound(id) => format!("Trip not found: {}", id),
            ActivityError::InvalidDateRange(msg) => msg.clone(),
            ActivityError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ActivityError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ActivityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ActivityError {}

impl From<crate::domain::trip::TripError> for ActivityError {
    fn from(err: crate::domain::trip::TripError) -> Self {
        use crate::domain::trip::TripError;
        match err {
            TripError::NotFound(id) => ActivityError::TripNotFound(id),
            TripError::InvalidDateRange(msg) => ActivityError::InvalidDateRange(msg),
            TripError::ValidationFailed { field, message } => {
                ActivityError::ValidationFailed { field, message }
            }
            other => ActivityError::Infrastructure(other.to_string()),
        }
    }
}

impl From<DomainError> for ActivityError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ActivityError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.message,
            },
            ErrorCode::InvalidDateRange => ActivityError::InvalidDateRange(err.message),
            _ => ActivityError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_not_found_maps_to_code() {
        let err = ActivityError::trip_not_found(TripId::new());
        assert_eq!(err.code(), ErrorCode::TripNotFound);
    }

    #[test]
    fn invalid_date_range_keeps_message() {
        let err = ActivityError::invalid_date_range("before trip start");
        assert_eq!(err.message(), "before trip start");
        assert_eq!(err.code(), ErrorCode::InvalidDateRange);
    }

    #[test]
    fn domain_database_error_becomes_infrastructure() {
        let err: ActivityError = DomainError::database("timeout").into();
        assert!(matches!(err, ActivityError::Infrastructure(_)));
    }
}
