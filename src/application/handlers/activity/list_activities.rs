//! ListActivitiesHandler - Query handler for a trip's day-by-day schedule.

use std::sync::Arc;

use crate::domain::activity::{bucket_by_day, ActivityError, DaySchedule};
use crate::domain::foundation::TripId;
use crate::ports::{ActivityRepository, TripRepository};

/// Query for a trip's schedule.
#[derive(Debug, Clone)]
pub struct ListActivitiesQuery {
    pub trip_id: TripId,
}

/// The trip's activities grouped into one bucket per calendar day.
#[derive(Debug, Clone)]
pub struct ListActivitiesResult {
    pub days: Vec<DaySchedule>,
}

/// Handler for listing a trip's activities by day.
pub struct ListActivitiesHandler {
    trips: Arc<dyn TripRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl ListActivitiesHandler {
    pub fn new(trips: Arc<dyn TripRepository>, activities: Arc<dyn ActivityRepository>) -> Self {
        Self { trips, activities }
    }

    pub async fn handle(
        &self,
        query: ListActivitiesQuery,
    ) -> Result<ListActivitiesResult, ActivityError> {
        let trip = self
            .trips
            .find_by_id(&query.trip_id)
            .await?
            .ok_or(ActivityError::TripNotFound(query.trip_id))?;

        let activities = self.activities.find_by_trip(trip.id()).await?;
        let days = bucket_by_day(trip.starts_at(), trip.ends_at(), &activities);

        Ok(ListActivitiesResult { days })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::activity::Activity;
    use crate::domain::foundation::{ActivityId, Timestamp};
    use crate::domain::trip::Trip;

    async fn seed_trip(store: &InMemoryStore, span_days: i64) -> Trip {
        let now = Timestamp::now();
        let trip = Trip::new(
            TripId::new(),
            "Salvador".to_string(),
            now.add_days(1),
            now.add_days(1 + span_days),
            now,
        )
        .unwrap();
        store.create_with_participants(&trip, &[]).await.unwrap();
        trip
    }

    #[tokio::test]
    async fn returns_a_bucket_for_every_trip_day() {
        let store = Arc::new(InMemoryStore::new());
        let trip = seed_trip(&store, 3).await;
        let handler = ListActivitiesHandler::new(store.clone(), store.clone());

        let result = handler
            .handle(ListActivitiesQuery { trip_id: *trip.id() })
            .await
            .unwrap();

        assert_eq!(result.days.len(), 4);
        assert!(result.days.iter().all(|d| d.activities.is_empty()));
    }

    #[tokio::test]
    async fn groups_activities_under_their_day() {
        let store = Arc::new(InMemoryStore::new());
        let trip = seed_trip(&store, 2).await;
        let handler = ListActivitiesHandler::new(store.clone(), store.clone());

        let first_day = Activity::new(
            ActivityId::new(),
            *trip.id(),
            "Beach morning".to_string(),
            *trip.starts_at(),
        )
        .unwrap();
        let last_day = Activity::new(
            ActivityId::new(),
            *trip.id(),
            "Farewell dinner".to_string(),
            *trip.ends_at(),
        )
        .unwrap();
        store.create(&first_day).await.unwrap();
        store.create(&last_day).await.unwrap();

        let result = handler
            .handle(ListActivitiesQuery { trip_id: *trip.id() })
            .await
            .unwrap();

        assert_eq!(result.days.len(), 3);
        assert_eq!(result.days[0].activities[0].title(), "Beach morning");
        assert!(result.days[1].activities.is_empty());
        assert_eq!(result.days[2].activities[0].title(), "Farewell dinner");
    }

    #[tokio::test]
    async fn unknown_trip_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let handler = ListActivitiesHandler::new(store.clone(), store);

        let result = handler
            .handle(ListActivitiesQuery {
                trip_id: TripId::new(),
            })
            .await;

        assert!(matches!(result, Err(ActivityError::TripNotFound(_))));
    }
}
