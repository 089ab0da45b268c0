//! HTTP DTOs for trip endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::trip::{MIN_DESTINATION_LENGTH, MIN_OWNER_NAME_LENGTH};

use super::super::error::ErrorResponse;

/// Request to create a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTripRequest {
    pub destination: String,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub owner_name: String,
    pub owner_email: String,
    #[serde(default)]
    pub emails_to_invite: Vec<String>,
}

impl CreateTripRequest {
    /// Field-shape checks the API enforces before the domain sees the
    /// request. Date and email rules live in the domain.
    pub fn validate(&self) -> Result<(), ErrorResponse> {
        if self.destination.chars().count() < MIN_DESTINATION_LENGTH {
            return Err(ErrorResponse::bad_request(format!(
                "destination must be at least {} characters",
                MIN_DESTINATION_LENGTH
            )));
        }
        if self.owner_name.chars().count() < MIN_OWNER_NAME_LENGTH {
            return Err(ErrorResponse::bad_request(format!(
                "owner_name must be at least {} characters",
                MIN_OWNER_NAME_LENGTH
            )));
        }
        Ok(())
    }
}

/// Response for successful trip creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTripResponse {
    pub trip_id: String,
}
