//! HTTP routes for activity endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_activity, list_activities, ActivityHandlers};

/// Creates the activity router.
pub fn activity_routes(handlers: ActivityHandlers) -> Router {
    Router::new()
        .route("/trips/:trip_id/activities", post(create_activity))
        .route("/trips/:trip_id/activities", get(list_activities))
        .with_state(handlers)
}
