//! PostgreSQL implementation of ParticipantRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, TripId};
use crate::domain::trip::Participant;
use crate::ports::ParticipantRepository;

/// PostgreSQL implementation of ParticipantRepository.
#[derive(Clone)]
pub struct PostgresParticipantRepository {
    pool: PgPool,
}

impl PostgresParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PostgresParticipantRepository {
    async fn create(&self, participant: &Participant) -> Result<(), DomainError> {
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
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert participant: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &ParticipantId,
    ) -> Result<Option<Participant>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, trip_id, name, email, is_owner, is_confirmed
            FROM participants
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch participant: {}", e)))?;

        row.map(row_to_participant).transpose()
    }

    async fn find_by_trip(&self, trip_id: &TripId) -> Result<Vec<Participant>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, trip_id, name, email, is_owner, is_confirmed
            FROM participants
            WHERE trip_id = $1
            ORDER BY is_owner DESC, email
            "#,
        )
        .bind(trip_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::database(format!("Failed to fetch trip participants: {}", e))
        })?;

        rows.into_iter().map(row_to_participant).collect()
    }

    async fn mark_confirmed(&self, id: &ParticipantId) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE participants SET is_confirmed = TRUE WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to confirm participant: {}", e))
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ParticipantNotFound,
                format!("Participant not found: {}", id),
            ));
        }

        Ok(())
    }
}

fn row_to_participant(row: PgRow) -> Result<Participant, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to read participant id: {}", e)))?;
    let trip_id: uuid::Uuid = row
        .try_get("trip_id")
        .map_err(|e| DomainError::database(format!("Failed to read trip_id: {}", e)))?;
    let name: Option<String> = row
        .try_get("name")
        .map_err(|e| DomainError::database(format!("Failed to read name: {}", e)))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| DomainError::database(format!("Failed to read email: {}", e)))?;
    let is_owner: bool = row
        .try_get("is_owner")
        .map_err(|e| DomainError::database(format!("Failed to read is_owner: {}", e)))?;
    let is_confirmed: bool = row
        .try_get("is_confirmed")
        .map_err(|e| DomainError::database(format!("Failed to read is_confirmed: {}", e)))?;

    Ok(Participant::reconstitute(
        ParticipantId::from_uuid(id),
        TripId::from_uuid(trip_id),
        name,
        email,
        is_owner,
        is_confirmed,
    ))
}
