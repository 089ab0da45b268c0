//! Trip-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, TripId};

/// Errors surfaced by trip and invitation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripError {
    /// Trip was not found.
    NotFound(TripId),
    /// Participant was not found.
    ParticipantNotFound(ParticipantId),
    /// Date ordering or bounds rule was violated.
    InvalidDateRange(String),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl TripError {
    pub fn not_found(id: TripId) -> Self {
        TripError::NotFound(id)
    }
    pub fn participant_not_found(id: ParticipantId) -> Self {
        TripError::ParticipantNotFound(id)
    }
    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        TripError::InvalidDateRange(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TripError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        TripError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            TripError::NotFound(_) => ErrorCode::TripNotFound,
            TripError::ParticipantNotFound(_) => ErrorCode::ParticipantNotFound,
            TripError::InvalidDateRange(_) => ErrorCode::InvalidDateRange,
            TripError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TripError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            TripError::NotFound(id) => format!("Trip not found: {}", id),
            TripError::ParticipantNotFound(id) => format!("Participant not found: {}", id),
            TripError::InvalidDateRange(msg) => msg.clone(),
            TripError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            TripError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for TripError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TripError {}

impl From<DomainError> for TripError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => TripError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.message,
            },
            ErrorCode::InvalidDateRange => TripError::InvalidDateRange(err.message),
            _ => TripError::Infrastructure(err.to_string()),
        }
    }
}
