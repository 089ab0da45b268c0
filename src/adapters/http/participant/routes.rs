//! HTTP routes for participant endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{confirm_participant, create_invite, ParticipantHandlers};

/// Creates the participant router.
pub fn participant_routes(handlers: ParticipantHandlers) -> Router {
    Router::new()
        .route("/trips/:trip_id/invites", post(create_invite))
        .route("/participants/:participant_id/confirm", get(confirm_participant))
        .with_state(handlers)
}
