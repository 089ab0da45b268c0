//! HTTP adapters - the REST surface of the API.
//!
//! Each domain module has its own router, DTOs and status mapping.

pub mod activity;
pub mod error;
pub mod participant;
pub mod trip;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;

pub use activity::ActivityHandlers;
pub use error::ErrorResponse;
pub use participant::ParticipantHandlers;
pub use trip::TripHandlers;

/// Assembles the full API router from per-module routers.
pub fn api_router(
    trip: TripHandlers,
    activity: ActivityHandlers,
    participant: ParticipantHandlers,
) -> Router {
    Router::new()
        .merge(trip::trip_routes(trip))
        .merge(activity::activity_routes(activity))
        .merge(participant::participant_routes(participant))
}

/// 302 redirect used by the confirmation endpoints.
pub(crate) fn found_redirect(url: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, url.to_string())]).into_response()
}
