//! PostgreSQL implementation of ActivityRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::activity::Activity;
use crate::domain::foundation::{ActivityId, DomainError, Timestamp, TripId};
use crate::ports::ActivityRepository;

/// PostgreSQL implementation of ActivityRepository.
#[derive(Clone)]
pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn create(&self, activity: &Activity) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO activities (id, trip_id, title, occurs_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(activity.id().as_uuid())
        .bind(activity.trip_id().as_uuid())
        .bind(activity.title())
        .bind(activity.occurs_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert activity: {}", e)))?;

        Ok(())
    }

    async fn find_by_trip(&self, trip_id: &TripId) -> Result<Vec<Activity>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, trip_id, title, occurs_at
            FROM activities
            WHERE trip_id = $1
            ORDER BY occurs_at
            "#,
        )
        .bind(trip_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to fetch trip activities: {}", e))
        })?;

        rows.into_iter().map(row_to_activity).collect()
    }
}

fn row_to_activity(row: PgRow) -> Result<Activity, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to read activity id: {}", e)))?;
    let trip_id: uuid::Uuid = row
        .try_get("trip_id")
        .map_err(|e| DomainError::database(format!("Failed to read trip_id: {}", e)))?;
    let title: String = row
        .try_get("title")
        .map_err(|e| DomainError::database(format!("Failed to read title: {}", e)))?;
    let occurs_at: chrono::DateTime<chrono::Utc> = row
        .try_get("occurs_at")
        .map_err(|e| DomainError::database(format!("Failed to read occurs_at: {}", e)))?;

    Ok(Activity::reconstitute(
        ActivityId::from_uuid(id),
        TripId::from_uuid(trip_id),
        title,
        Timestamp::from_datetime(occurs_at),
    ))
}
