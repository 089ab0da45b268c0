//! Participant repository port.

use crate::domain::foundation::{DomainError, ParticipantId, TripId};
use crate::domain::trip::Participant;
use async_trait::async_trait;

/// Repository port for Participant persistence.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Save a new participant.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, participant: &Participant) -> Result<(), DomainError>;

    /// Find a participant by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ParticipantId)
        -> Result<Option<Participant>, DomainError>;

    /// Find all participants of a trip, owner included.
    async fn find_by_trip(&self, trip_id: &TripId) -> Result<Vec<Participant>, DomainError>;

    /// Mark a participant as confirmed.
    ///
    /// # Errors
    ///
    /// - `ParticipantNotFound` if the participant doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn mark_confirmed(&self, id: &ParticipantId) -> Result<(), DomainError>;
}
