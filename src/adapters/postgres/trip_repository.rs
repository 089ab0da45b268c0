//! PostgreSQL implementation of TripRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, TripId};
use crate::domain::trip::{Participant, Trip};
use crate::ports::TripRepository;

/// PostgreSQL implementation of TripRepository.
#[derive(Clone)]
pub struct PostgresTripRepository {
    pool: PgPool,
}

impl PostgresTripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TripRepository for PostgresTripRepository {
    async fn create_with_participants(
        &self,
        trip: &Trip,
        participants: &[Participant],
    ) -> Result<(), DomainError> {
        // Trip and participants commit as one unit.
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::database(format!("Failed to begin transaction: {}", e))
        })?;

        sqlx::query(
            r#"
            INSERT INTO trips (id, destination, starts_at, ends_at, is_confirmed, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(trip.id().as_uuid())
        .bind(trip.destination())
        .bind(trip.starts_at().as_datetime())
        .bind(trip.ends_at().as_datetime())
        .bind(trip.is_confirmed())
        .bind(trip.created_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert trip: {}", e)))?;

        for participant in participants {
            sqlx::query(
                r#"
                INSERT INTO participants (id, trip_id, name, email, is_owner, is_confirmed)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(participant.id().as_uuid())
            .bind(participant.trip_id().as_uuid())
            .bind(participant.name())
            .bind(participant.email())
            .bind(participant.is_owner())
            .bind(participant.is_confirmed())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to insert participant: {}", e))
            })?;
        }

        tx.commit().await.map_err(|e| {
            DomainError::database(format!("Failed to commit transaction: {}", e))
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &TripId) -> Result<Option<Trip>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, destination, starts_at, ends_at, is_confirmed, created_at
            FROM trips
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch trip: {}", e)))?;

        row.map(row_to_trip).transpose()
    }

    async fn mark_confirmed(&self, id: &TripId) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE trips SET is_confirmed = TRUE WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to confirm trip: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::TripNotFound,
                format!("Trip not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_trip(row: PgRow) -> Result<Trip, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to read trip id: {}", e)))?;
    let destination: String = row
        .try_get("destination")
        .map_err(|e| DomainError::database(format!("Failed to read destination: {}", e)))?;
    let starts_at: chrono::DateTime<chrono::Utc> = row
        .try_get("starts_at")
        .map_err(|e| DomainError::database(format!("Failed to read starts_at: {}", e)))?;
    let ends_at: chrono::DateTime<chrono::Utc> = row
        .try_get("ends_at")
        .map_err(|e| DomainError::database(format!("Failed to read ends_at: {}", e)))?;
    let is_confirmed: bool = row
        .try_get("is_confirmed")
        .map_err(|e| DomainError::database(format!("Failed to read is_confirmed: {}", e)))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to read created_at: {}", e)))?;

    Ok(Trip::reconstitute(
        TripId::from_uuid(id),
        destination,
        Timestamp::from_datetime(starts_at),
        Timestamp::from_datetime(ends_at),
        is_confirmed,
        Timestamp::from_datetime(created_at),
    ))
}
