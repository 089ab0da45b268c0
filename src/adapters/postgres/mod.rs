//! PostgreSQL implementations of the repository ports.

mod activity_repository;
mod participant_repository;
mod trip_repository;

pub use activity_repository::PostgresActivityRepository;
pub use participant_repository::PostgresParticipantRepository;
pub use trip_repository::PostgresTripRepository;
