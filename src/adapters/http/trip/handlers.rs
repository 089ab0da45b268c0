//! HTTP handlers for trip endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::trip::{
    ConfirmTripCommand, ConfirmTripHandler, CreateTripCommand, CreateTripHandler,
};
use crate::domain::foundation::TripId;
use crate::domain::trip::TripError;

use super::super::error::{error_response, invalid_id_response};
use super::super::found_redirect;
use super::dto::{CreateTripRequest, CreateTripResponse};

#[derive(Clone)]
pub struct TripHandlers {
    create_handler: Arc<CreateTripHandler>,
    confirm_handler: Arc<ConfirmTripHandler>,
}

impl TripHandlers {
    pub fn new(
        create_handler: Arc<CreateTripHandler>,
        confirm_handler: Arc<ConfirmTripHandler>,
    ) -> Self {
        Self {
            create_handler,
            confirm_handler,
        }
    }
}

/// POST /trips - Create a trip with its owner and invitees
pub async fn create_trip(
    State(handlers): State<TripHandlers>,
    Json(req): Json<CreateTripRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return (StatusCode::BAD_REQUEST, Json(e)).into_response();
    }

    let cmd = CreateTripCommand {
        destination: req.destination,
        starts_at: req.starts_at,
        ends_at: req.ends_at,
        owner_name: req.owner_name,
        owner_email: req.owner_email,
        invitee_emails: req.emails_to_invite,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(CreateTripResponse {
                trip_id: result.trip_id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_trip_error(e),
    }
}

/// GET /trips/:id/confirm - Confirm a trip and redirect to the web app
pub async fn confirm_trip(
    State(handlers): State<TripHandlers>,
    Path(trip_id): Path<String>,
) -> Response {
    let trip_id = match trip_id.parse::<TripId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("trip id"),
    };

    match handlers
        .confirm_handler
        .handle(ConfirmTripCommand { trip_id })
        .await
    {
        Ok(result) => found_redirect(&result.redirect_url),
        Err(e) => handle_trip_error(e),
    }
}

pub(crate) fn handle_trip_error(error: TripError) -> Response {
    error_response(error.code(), error.message())
}
