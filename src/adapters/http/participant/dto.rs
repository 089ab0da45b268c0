//! HTTP DTOs for participant endpoints.

use serde::{Deserialize, Serialize};

/// Request to invite a participant to an existing trip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInviteRequest {
    pub email: String,
}

/// Response for a successful invite.
#[derive(Debug, Clone, Serialize)]
pub struct CreateInviteResponse {
    pub participant_id: String,
}
