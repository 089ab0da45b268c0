//! Trip operation handlers.

mod confirm_trip;
mod create_trip;

pub use confirm_trip::{ConfirmTripCommand, ConfirmTripHandler, ConfirmTripResult};
pub use create_trip::{CreateTripCommand, CreateTripHandler, CreateTripResult};
