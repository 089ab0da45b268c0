//! Trip repository port.
//!
//! Defines the persistence contract for the Trip aggregate. Reads by id
//! signal absence with `Ok(None)`, never with an error.

use crate::domain::foundation::{DomainError, TripId};
use crate::domain::trip::{Participant, Trip};
use async_trait::async_trait;

/// Repository port for Trip aggregate persistence.
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Save a new trip together with its initial participants as one
    /// atomic unit. Either everything is persisted or nothing is.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create_with_participants(
        &self,
        trip: &Trip,
        participants: &[Participant],
    ) -> Result<(), DomainError>;

    /// Find a trip by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError>;

    /// Mark a trip as confirmed.
    ///
    /// # Errors
    ///
    /// - `TripNotFound` if the trip doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn mark_confirmed(&self, id: &TripId) -> Result<(), DomainError>;
}
