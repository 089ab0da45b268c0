//! In-memory implementation of the repository ports.
//!
//! Backs handler tests and local development without a database. All three
//! repository ports are implemented on one store so a test can wire every
//! handler against the same state.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::activity::Activity;
use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, TripId};
use crate::domain::trip::{Participant, Trip};
use crate::ports::{ActivityRepository, ParticipantRepository, TripRepository};

/// In-memory store implementing all repository ports.
#[derive(Default)]
pub struct InMemoryStore {
    trips: Mutex<Vec<Trip>>,
    participants: Mutex<Vec<Participant>>,
    activities: Mutex<Vec<Activity>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all trips.
    pub fn trips(&self) -> Vec<Trip> {
        self.trips.lock().unwrap().clone()
    }

    /// Returns a snapshot of all participants.
    pub fn participants(&self) -> Vec<Participant> {
        self.participants.lock().unwrap().clone()
    }

    /// Returns a snapshot of all activities.
    pub fn activities(&self) -> Vec<Activity> {
        self.activities.lock().unwrap().clone()
    }
}

#[async_trait]
impl TripRepository for InMemoryStore {
    async fn create_with_participants(
        &self,
        trip: &Trip,
        participants: &[Participant],
    ) -> Result<(), DomainError> {
        self.trips.lock().unwrap().push(trip.clone());
        self.participants
            .lock()
            .unwrap()
            .extend_from_slice(participants);
        Ok(())
    }

    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        Ok(self
            .trips
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn mark_confirmed(&self, id: &TripId) -> Result<(), DomainError> {
        let mut trips = self.trips.lock().unwrap();
        match trips.iter_mut().find(|t| t.id() == id) {
            Some(trip) => {
                trip.confirm();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::TripNotFound,
                format!("Trip not found: {}", id),
            )),
        }
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryStore {
    async fn create(&self, participant: &Participant) -> Result<(), DomainError> {
        self.participants.lock().unwrap().push(participant.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &ParticipantId,
    ) -> Result<Option<Participant>, DomainError> {
        Ok(self
            .participants
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id() == id)
            .cloned())
    }

    async fn find_by_trip(&self, trip_id: &TripId) -> Result<Vec<Participant>, DomainError> {
        Ok(self
            .participants
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.trip_id() == trip_id)
            .cloned()
            .collect())
    }

    async fn mark_confirmed(&self, id: &ParticipantId) -> Result<(), DomainError> {
        let mut participants = self.participants.lock().unwrap();
        match participants.iter_mut().find(|p| p.id() == id) {
            Some(participant) => {
                participant.confirm();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ParticipantNotFound,
                format!("Participant not found: {}", id),
            )),
        }
    }
}

#[async_trait]
impl ActivityRepository for InMemoryStore {
    async fn create(&self, activity: &Activity) -> Result<(), DomainError> {
        self.activities.lock().unwrap().push(activity.clone());
        Ok(())
    }

    async fn find_by_trip(&self, trip_id: &TripId) -> Result<Vec<Activity>, DomainError> {
        let mut activities: Vec<Activity> = self
            .activities
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.trip_id() == trip_id)
            .cloned()
            .collect();
        activities.sort_by_key(|a| *a.occurs_at());
        Ok(activities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ActivityId, Timestamp};

    fn sample_trip() -> Trip {
        let now = Timestamp::now();
        Trip::new(
            TripId::new(),
            "Salvador".to_string(),
            now.add_days(1),
            now.add_days(4),
            now,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_with_participants_stores_both() {
        let store = InMemoryStore::new();
        let trip = sample_trip();
        let owner = Participant::owner(
            ParticipantId::new(),
            *trip.id(),
            "Ana",
            "ana@example.com",
        )
        .unwrap();

        store
            .create_with_participants(&trip, std::slice::from_ref(&owner))
            .await
            .unwrap();

        assert_eq!(store.trips().len(), 1);
        assert_eq!(store.participants().len(), 1);
        let found = TripRepository::find_by_id(&store, trip.id()).await.unwrap();
        assert_eq!(found, Some(trip));
    }

    #[tokio::test]
    async fn mark_confirmed_flips_trip_state() {
        let store = InMemoryStore::new();
        let trip = sample_trip();
        store.create_with_participants(&trip, &[]).await.unwrap();

        TripRepository::mark_confirmed(&store, trip.id())
            .await
            .unwrap();

        let found = TripRepository::find_by_id(&store, trip.id())
            .await
            .unwrap()
            .unwrap();
        assert!(found.is_confirmed());
    }

    #[tokio::test]
    async fn mark_confirmed_unknown_trip_errors() {
        let store = InMemoryStore::new();
        let result = TripRepository::mark_confirmed(&store, &TripId::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn activities_come_back_ordered_by_instant() {
        let store = InMemoryStore::new();
        let trip_id = TripId::new();
        let base = Timestamp::now();

        for (title, offset) in [("Later", 2), ("Earlier", 1)] {
            let activity = Activity::new(
                ActivityId::new(),
                trip_id,
                title.to_string(),
                base.add_days(offset),
            )
            .unwrap();
            ActivityRepository::create(&store, &activity).await.unwrap();
        }

        let activities = ActivityRepository::find_by_trip(&store, &trip_id)
            .await
            .unwrap();
        assert_eq!(activities[0].title(), "Earlier");
        assert_eq!(activities[1].title(), "Later");
    }

    #[tokio::test]
    async fn find_by_trip_filters_other_trips() {
        let store = InMemoryStore::new();
        let trip_id = TripId::new();
        let other_trip = TripId::new();

        let p1 = Participant::invited(ParticipantId::new(), trip_id, "a@x.com.br").unwrap();
        let p2 = Participant::invited(ParticipantId::new(), other_trip, "b@x.com.br").unwrap();
        ParticipantRepository::create(&store, &p1).await.unwrap();
        ParticipantRepository::create(&store, &p2).await.unwrap();

        let found = ParticipantRepository::find_by_trip(&store, &trip_id)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].email(), "a@x.com.br");
    }
}
