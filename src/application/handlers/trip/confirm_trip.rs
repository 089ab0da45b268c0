//! ConfirmTripHandler - Command handler for confirming a trip.
//!
//! Confirming flips the trip's state exactly once and fans confirmation
//! emails out to every non-owner participant. The fan-out is concurrent
//! and error-isolated: one failed delivery is logged without aborting the
//! sibling sends or the response.

use std::sync::Arc;

use futures::future;
use tracing::{debug, info, warn};

use crate::application::email::participant_invitation;
use crate::config::LinksConfig;
use crate::domain::foundation::TripId;
use crate::domain::trip::TripError;
use crate::ports::{EmailMessage, Mailer, ParticipantRepository, TripRepository};

/// Command to confirm a trip.
#[derive(Debug, Clone)]
pub struct ConfirmTripCommand {
    pub trip_id: TripId,
}

/// Result of trip confirmation: where the web front end should land.
#[derive(Debug, Clone)]
pub struct ConfirmTripResult {
    pub redirect_url: String,
}

/// Handler for confirming trips.
pub struct ConfirmTripHandler {
    trips: Arc<dyn TripRepository>,
    participants: Arc<dyn ParticipantRepository>,
    mailer: Arc<dyn Mailer>,
    links: LinksConfig,
}

impl ConfirmTripHandler {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        participants: Arc<dyn ParticipantRepository>,
        mailer: Arc<dyn Mailer>,
        links: LinksConfig,
    ) -> Self {
        Self {
            trips,
            participants,
            mailer,
            links,
        }
    }

    pub async fn handle(&self, cmd: ConfirmTripCommand) -> Result<ConfirmTripResult, TripError> {
        let trip = self
            .trips
            .find_by_id(&cmd.trip_id)
            .await?
            .ok_or(TripError::NotFound(cmd.trip_id))?;

        let redirect_url = self.links.trip_web_url(trip.id());

        // Idempotent: an already-confirmed trip short-circuits to the same
        // redirect without resending any email.
        if trip.is_confirmed() {
            debug!(trip_id = %trip.id(), "trip already confirmed, skipping emails");
            return Ok(ConfirmTripResult { redirect_url });
        }

        self.trips.mark_confirmed(trip.id()).await?;
        info!(trip_id = %trip.id(), "trip confirmed");

        let guests: Vec<_> = self
            .participants
            .find_by_trip(trip.id())
            .await?
            .into_iter()
            .filter(|p| !p.is_owner())
            .collect();

        let sends = guests.iter().map(|participant| {
            let content = participant_invitation(
                trip.destination(),
                trip.starts_at(),
                trip.ends_at(),
                &self.links.participant_confirm_url(participant.id()),
            );
            let message = EmailMessage {
                to: participant.email().to_string(),
                to_name: participant.name().map(String::from),
                subject: content.subject,
                html_body: content.html_body,
            };
            let mailer = Arc::clone(&self.mailer);
            let participant_id = *participant.id();
            async move {
                match mailer.send(message).await {
                    Ok(handle) => debug!(
                        participant_id = %participant_id,
                        message_id = %handle.message_id,
                        "participant confirmation email sent"
                    ),
                    Err(e) => warn!(
                        participant_id = %participant_id,
                        error = %e,
                        "failed to send participant confirmation email"
                    ),
                }
            }
        });
        future::join_all(sends).await;

        Ok(ConfirmTripResult { redirect_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::RecordingMailer;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{ParticipantId, Timestamp};
    use crate::domain::trip::{Participant, Trip};

    async fn seed_trip(store: &InMemoryStore, invitees: &[&str]) -> Trip {
        let now = Timestamp::now();
        let trip = Trip::new(
            TripId::new(),
            "Florianópolis".to_string(),
            now.add_days(1),
            now.add_days(6),
            now,
        )
        .unwrap();

        let mut participants = vec![Participant::owner(
            ParticipantId::new(),
            *trip.id(),
            "Ana",
            "a@x.com",
        )
        .unwrap()];
        for email in invitees {
            participants
                .push(Participant::invited(ParticipantId::new(), *trip.id(), *email).unwrap());
        }

        store
            .create_with_participants(&trip, &participants)
            .await
            .unwrap();
        trip
    }

    fn handler_with(
        store: Arc<InMemoryStore>,
        mailer: Arc<RecordingMailer>,
    ) -> ConfirmTripHandler {
        ConfirmTripHandler::new(store.clone(), store, mailer, LinksConfig::default())
    }

    #[tokio::test]
    async fn confirms_trip_and_emails_every_guest() {
        let store = Arc::new(InMemoryStore::new());
        let mailer = Arc::new(RecordingMailer::new());
        let trip = seed_trip(&store, &["b@x.com", "c@x.com"]).await;
        let handler = handler_with(store.clone(), mailer.clone());

        let result = handler
            .handle(ConfirmTripCommand { trip_id: *trip.id() })
            .await
            .unwrap();

        assert_eq!(
            result.redirect_url,
            format!("http://localhost:3000/trips/{}", trip.id())
        );
        assert!(store.trips()[0].is_confirmed());

        let sent = mailer.sent_messages();
        assert_eq!(sent.len(), 2);
        let recipients: Vec<&str> = sent.iter().map(|m| m.to.as_str()).collect();
        assert!(recipients.contains(&"b@x.com"));
        assert!(recipients.contains(&"c@x.com"));
        // Owner does not get a participant confirmation email.
        assert!(!recipients.contains(&"a@x.com"));
    }

    #[tokio::test]
    async fn second_confirmation_returns_same_redirect_without_emails() {
        let store = Arc::new(InMemoryStore::new());
        let mailer = Arc::new(RecordingMailer::new());
        let trip = seed_trip(&store, &["b@x.com"]).await;
        let handler = handler_with(store.clone(), mailer.clone());

        let first = handler
            .handle(ConfirmTripCommand { trip_id: *trip.id() })
            .await
            .unwrap();
        let second = handler
            .handle(ConfirmTripCommand { trip_id: *trip.id() })
            .await
            .unwrap();

        assert_eq!(first.redirect_url, second.redirect_url);
        assert!(store.trips()[0].is_confirmed());
        // Only the first call sent anything.
        assert_eq!(mailer.sent_count(), 1);
    }

    #[tokio::test]
    async fn unknown_trip_is_not_found() {
        let store = Arc::new(InMemoryStore::new());
        let mailer = Arc::new(RecordingMailer::new());
        let handler = handler_with(store, mailer);

        let result = handler
            .handle(ConfirmTripCommand {
                trip_id: TripId::new(),
            })
            .await;

        assert!(matches!(result, Err(TripError::NotFound(_))));
    }

    #[tokio::test]
    async fn email_failures_do_not_fail_confirmation() {
        let store = Arc::new(InMemoryStore::new());
        let mailer = Arc::new(RecordingMailer::failing());
        let trip = seed_trip(&store, &["b@x.com", "c@x.com"]).await;
        let handler = handler_with(store.clone(), mailer);

        let result = handler
            .handle(ConfirmTripCommand { trip_id: *trip.id() })
            .await;

        assert!(result.is_ok());
        assert!(store.trips()[0].is_confirmed());
    }

    #[tokio::test]
    async fn emails_link_each_guest_to_their_own_confirmation() {
        let store = Arc::new(InMemoryStore::new());
        let mailer = Arc::new(RecordingMailer::new());
        let trip = seed_trip(&store, &["b@x.com"]).await;
        let handler = handler_with(store.clone(), mailer.clone());

        handler
            .handle(ConfirmTripCommand { trip_id: *trip.id() })
            .await
            .unwrap();

        let guest = store
            .participants()
            .into_iter()
            .find(|p| !p.is_owner())
            .unwrap();
        let sent = mailer.sent_messages();
        assert!(sent[0]
            .html_body
            .contains(&format!("/participants/{}/confirm", guest.id())));
    }
}
