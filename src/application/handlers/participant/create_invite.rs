//! CreateInviteHandler - Command handler for inviting a participant to a trip.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::email::participant_invitation;
use crate::config::LinksConfig;
use crate::domain::foundation::{ParticipantId, TripId};
use crate::domain::trip::{Participant, TripError};
use crate::ports::{EmailMessage, Mailer, ParticipantRepository, TripRepository};

/// Command to invite someone to an existing trip.
#[derive(Debug, Clone)]
pub struct CreateInviteCommand {
    pub trip_id: TripId,
    pub email: String,
}

/// Result of a successful invite.
#[derive(Debug, Clone)]
pub struct CreateInviteResult {
    pub participant_id: ParticipantId,
}

/// Handler for creating invites.
pub struct CreateInviteHandler {
    trips: Arc<dyn TripRepository>,
    participants: Arc<dyn ParticipantRepository>,
    mailer: Arc<dyn Mailer>,
    links: LinksConfig,
}

impl CreateInviteHandler {
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

    pub async fn handle(&self, cmd: CreateInviteCommand) -> Result<CreateInviteResult, TripError> {
        let trip = self
            .trips
            .find_by_id(&cmd.trip_id)
            .await?
            .ok_or(TripError::NotFound(cmd.trip_id))?;

        let participant = Participant::invited(ParticipantId::new(), *trip.id(), cmd.email)?;
        self.participants.create(&participant).await?;

        info!(
            participant_id = %participant.id(),
            trip_id = %trip.id(),
            "participant invited"
        );

        // Invitation email is best-effort; the participant row is already
        // committed and is returned regardless.
        let content = participant_invitation(
            trip.destination(),
            trip.starts_at(),
            trip.ends_at(),
            &self.links.participant_confirm_url(participant.id()),
        );
        let message = EmailMessage {
            to: participant.email().to_string(),
            to_name: None,
            subject: content.subject,
            html_body: content.html_body,
        };
        match self.mailer.send(message).await {
            Ok(handle) => debug!(message_id = %handle.message_id, "invitation email sent"),
            Err(e) => warn!(
                participant_id = %participant.id(),
                error = %e,
                "failed to send invitation email"
            ),
        }

        Ok(CreateInviteResult {
            participant_id: *participant.id(),
        })
    }
}
