//! HTTP adapter for participant endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateInviteRequest, CreateInviteResponse};
pub use handlers::ParticipantHandlers;
pub use routes::participant_routes;
