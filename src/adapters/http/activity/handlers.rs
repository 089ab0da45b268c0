//! HTTP handlers for activity endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::activity::{
    CreateActivityCommand, CreateActivityHandler, ListActivitiesHandler, ListActivitiesQuery,
};
use crate::domain::activity::ActivityError;
use crate::domain::foundation::TripId;

use super::super::error::{error_response, invalid_id_response};
use super::dto::{
    CreateActivityRequest, CreateActivityResponse, DayResponse, ListActivitiesResponse,
};

#[derive(Clone)]
pub struct ActivityHandlers {
    create_handler: Arc<CreateActivityHandler>,
    list_handler: Arc<ListActivitiesHandler>,
}

impl ActivityHandlers {
    pub fn new(
        create_handler: Arc<CreateActivityHandler>,
        list_handler: Arc<ListActivitiesHandler>,
    ) -> Self {
        Self {
            create_handler,
            list_handler,
        }
    }
}

/// POST /trips/:id/activities - Schedule an activity on a trip
pub async fn create_activity(
    State(handlers): State<ActivityHandlers>,
    Path(trip_id): Path<String>,
    Json(req): Json<CreateActivityRequest>,
) -> Response {
    let trip_id = match trip_id.parse::<TripId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("trip id"),
    };
    if let Err(e) = req.validate() {
        return (StatusCode::BAD_REQUEST, Json(e)).into_response();
    }

    let cmd = CreateActivityCommand {
        trip_id,
        title: req.title,
        occurs_at: req.occurs_at,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(result) => (
            StatusCode::CREATED,
            Json(CreateActivityResponse {
                activity_id: result.activity_id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_activity_error(e),
    }
}

/// GET /trips/:id/activities - List a trip's activities grouped by day
pub async fn list_activities(
    State(handlers): State<ActivityHandlers>,
    Path(trip_id): Path<String>,
) -> Response {
    let trip_id = match trip_id.parse::<TripId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response("trip id"),
    };

    match handlers
        .list_handler
        .handle(ListActivitiesQuery { trip_id })
        .await
    {
        Ok(result) => (
            StatusCode::OK,
            Json(ListActivitiesResponse {
                activities: result.days.iter().map(DayResponse::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => handle_activity_error(e),
    }
}

fn handle_activity_error(error: ActivityError) -> Response {
    error_response(error.code(), error.message())
}
