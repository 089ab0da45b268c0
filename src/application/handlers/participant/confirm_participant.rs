//! ConfirmParticipantHandler - Command handler for confirming a participant.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::LinksConfig;
use crate::domain::foundation::ParticipantId;
use crate::domain::trip::TripError;
use crate::ports::ParticipantRepository;

/// Command to confirm a participant's presence.
#[derive(Debug, Clone)]
pub struct ConfirmParticipantCommand {
    pub participant_id: ParticipantId,
}

/// Result of participant confirmation: where the web front end should land.
#[derive(Debug, Clone)]
pub struct ConfirmParticipantResult {
    pub redirect_url: String,
}

/// Handler for confirming participants.
pub struct ConfirmParticipantHandler {
    participants: Arc<dyn ParticipantRepository>,
    links: LinksConfig,
}

impl ConfirmParticipantHandler {
    pub fn new(participants: Arc<dyn ParticipantRepository>, links: LinksConfig) -> Self {
        Self {
            participants,
            links,
        }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmParticipantCommand,
    ) -> Result<ConfirmParticipantResult, TripError> {
        let participant = self
            .participants
            .find_by_id(&cmd.participant_id)
            .await?
            .ok_or(TripError::ParticipantNotFound(cmd.participant_id))?;

        let redirect_url = self.links.trip_web_url(participant.trip_id());

        if participant.is_confirmed() {
            debug!(participant_id = %participant.id(), "participant already confirmed");
            return Ok(ConfirmParticipantResult { redirect_url });
        }

        self.participants.mark_confirmed(participant.id()).await?;
        info!(
            participant_id = %participant.id(),
            trip_id = %participant.trip_id(),
            "participant confirmed"
        );

        Ok(ConfirmParticipantResult { redirect_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{Timestamp, TripId};
    use crate::domain::trip::{Participant, Trip};
    use crate::ports::TripRepository;

    async fn seed_participant(store: &InMemoryStore) -> Participant {
        let now = Timestamp::now();
        let trip = Trip::new(
            TripId::new(),
            "Recife".to_string(),
            now.add_days(1),
            now.add_days(4),
            now,
        )
        .unwrap();
        let participant =
            Participant::invited(ParticipantId::new(), *trip.id(), "guest@x.com").unwrap();
        store
            .create_with_participants(&trip, std::slice::from_ref(&participant))
            .await
            .unwrap();
        participant
    }

    #[tokio::test]
    async fn confirms_participant_and_redirects_to_their_trip() {
        let store = Arc::new(InMemoryStore::new());
        let participant = seed_participant(&store).await;
        let handler = ConfirmParticipantHandler::new(store.clone(), LinksConfig::default());

        let result = handler
            .handle(ConfirmParticipantCommand {
                participant_id: *participant.id(),
            })
            .await
            .unwrap();

        assert_eq!(
            result.redirect_url,
            format!("http://localhost:3000/trips/{}", participant.trip_id())
        );
        assert!(store.participants()[0].is_confirmed());
    }

    #[tokio::test]
    async fn second_confirmation_is_a_no_op() {
        let store = Arc::new(InMemoryStore::new());
        let participant = seed_participant(&store).await;
        let handler = ConfirmParticipantHandler::new(store.clone(), LinksConfig::default());

        let first = handler
            .handle(ConfirmParticipantCommand {
                participant_id: *participant.id(),
            })
            .await
            .unwrap();
        let second = handler
            .handle(ConfirmParticipantCommand {
                participant_id: *participant.id(),
            })
            .await
            .unwrap();

        assert_eq!(first.redirect_url, second.redirect_url);
        assert!(store.participants()[0].is_confirmed());
    }

    #[tokio::test]
    async fn unknown_participant_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let handler = ConfirmParticipantHandler::new(store, LinksConfig::default());

        let result = handler
            .handle(ConfirmParticipantCommand {
                participant_id: ParticipantId::new(),
            })
            .await;

        assert!(matches!(result, Err(TripError::ParticipantNotFound(_))));
    }
}
