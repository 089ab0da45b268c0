//! HTTP adapter for activity endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ActivityResponse, CreateActivityRequest, CreateActivityResponse, DayResponse,
    ListActivitiesResponse,
};
pub use handlers::ActivityHandlers;
pub use routes::activity_routes;
