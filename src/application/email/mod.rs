//! Email rendering for confirmation messages.

mod templates;

pub use templates::{participant_invitation, trip_confirmation, EmailContent};
