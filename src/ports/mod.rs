//! Ports - trait contracts between the application core and adapters.
//!
//! Repositories abstract the relational store; the mailer abstracts the
//! outbound email provider. Implementations live under `adapters/`.

mod activity_repository;
mod mailer;
mod participant_repository;
mod trip_repository;

pub use activity_repository::ActivityRepository;
pub use mailer::{DeliveryHandle, EmailMessage, Mailer};
pub use participant_repository::ParticipantRepository;
pub use trip_repository::TripRepository;
