//! Trip module - the root aggregate of the planning domain.
//!
//! A trip spans a destination and a date range, owns its participants,
//! and is confirmed exactly once by its owner.

mod aggregate;
mod errors;
mod participant;

pub use aggregate::{Trip, MIN_DESTINATION_LENGTH, MIN_OWNER_NAME_LENGTH};
pub use errors::TripError;
pub use participant::Participant;
