//! HTTP routes for trip endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{confirm_trip, create_trip, TripHandlers};

/// Creates the trip router.
pub fn trip_routes(handlers: TripHandlers) -> Router {
    Router::new()
        .route("/trips", post(create_trip))
        .route("/trips/:trip_id/confirm", get(confirm_trip))
        .with_state(handlers)
}
