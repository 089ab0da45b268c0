//! Activity operation handlers.

mod create_activity;
mod list_activities;

pub use create_activity::{CreateActivityCommand, CreateActivityHandler, CreateActivityResult};
pub use list_activities::{ListActivitiesHandler, ListActivitiesQuery, ListActivitiesResult};
