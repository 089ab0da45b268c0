//! HTTP handlers for participant endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::participant::{
    ConfirmParticipantCommand, ConfirmParticipantHandler, CreateInviteCommand, CreateInviteHandler,
};
use crate::domain::foundation::{ParticipantId, TripId};

use super::super::error::invalid_id_response;
use super::super::found_redirect;
use super::super::trip::handle_trip_error;
use super::dto::{CreateInviteRequest, CreateInviteResponse};

#[derive(Clone)]
pub struct ParticipantHandlers {
    invite_handler: Arc<CreateInviteHandler>,
    confirm_handler: Arc<ConfirmParticipantHandler>,
}

impl ParticipantHandlers {
    pub fn new(
        invite_handler: Arc<CreateInviteHandler>,
        confirm_handler: Arc<ConfirmParticipantHandler>,
    ) -> Self {
        Self {
            invite_handler,
            confirm_handler,
        }
    }
}

/// POST /trips/:id/invites - Invite a participant to an existing trip
pub async fn create_invite(
    State(handlers): State<ParticipantHandlers>,
    Path(trip_id): Path<String>,
    Json(req): Json<CreateInviteRequest>,
) -> Response {
    let trip_id = match trip_id.parse::<TripId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("trip id"),
    };

    let cmd = CreateInviteCommand {
        trip_id,
        email: req.email,
    };

    match handlers.invite_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(CreateInviteResponse {
                participant_id: result.participant_id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_trip_error(e),
    }
}

/// GET /participants/:id/confirm - Confirm attendance and redirect to the web app
pub async fn confirm_participant(
    State(handlers): State<ParticipantHandlers>,
    Path(participant_id): Path<String>,
) -> Response {
    let participant_id = match participant_id.parse::<ParticipantId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("participant id"),
    };

    match handlers
        .confirm_handler
        .handle(ConfirmParticipantCommand { participant_id })
        .await
    {
        Ok(result) => found_redirect(&result.redirect_url),
        Err(e) => handle_trip_error(e),
    }
}
