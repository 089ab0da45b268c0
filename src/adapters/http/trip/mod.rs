//! HTTP adapter for trip endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateTripRequest, CreateTripResponse};
pub use handlers::TripHandlers;
pub(crate) use handlers::handle_trip_error;
pub use routes::trip_routes;
