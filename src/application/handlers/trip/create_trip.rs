//! CreateTripHandler - Command handler for creating new trips.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::email::trip_confirmation;
use crate::config::LinksConfig;
use crate::domain::foundation::{ParticipantId, Timestamp, TripId};
use crate::domain::trip::{Participant, Trip, TripError};
use crate::ports::{EmailMessage, Mailer, TripRepository};

/// Command to create a new trip.
#[derive(Debug, Clone)]
pub struct CreateTripCommand {
    pub destination: String,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub owner_name: String,
    pub owner_email: String,
    pub invitee_emails: Vec<String>,
}

/// Result of successful trip creation.
#[derive(Debug, Clone)]
pub struct CreateTripResult {
    pub trip_id: TripId,
}

/// Handler for creating trips.
pub struct CreateTripHandler {
    trips: Arc<dyn TripRepository>,
    mailer: Arc<dyn Mailer>,
    links: LinksConfig,
}

impl CreateTripHandler {
    pub fn new(trips: Arc<dyn TripRepository>, mailer: Arc<dyn Mailer>, links: LinksConfig) -> Self {
        Self {
            trips,
            mailer,
            links,
        }
    }

    pub async fn handle(&self, cmd: CreateTripCommand) -> Result<CreateTripResult, TripError> {
        // 1. Build the aggregate; date rules are checked here.
        let now = Timestamp::now();
        let trip = Trip::new(
            TripId::new(),
            cmd.destination,
            cmd.starts_at,
            cmd.ends_at,
            now,
        )?;

        // 2. Owner is pre-confirmed; invitees start unconfirmed.
        let mut participants = vec![Participant::owner(
            ParticipantId::new(),
            *trip.id(),
            cmd.owner_name.clone(),
            cmd.owner_email.clone(),
        )?];
        for email in &cmd.invitee_emails {
            participants.push(Participant::invited(
                ParticipantId::new(),
                *trip.id(),
                email.clone(),
            )?);
        }

        // 3. Trip and participants are persisted as one unit.
        self.trips
            .create_with_participants(&trip, &participants)
            .await?;

        info!(
            trip_id = %trip.id(),
            destination = trip.destination(),
            participants = participants.len(),
            "trip created"
        );

        // 4. Owner confirmation email is best-effort: a delivery failure
        //    never rolls back the committed trip.
        let content = trip_confirmation(
            trip.destination(),
            trip.starts_at(),
            trip.ends_at(),
            &self.links.trip_confirm_url(trip.id()),
        );
        let message = EmailMessage {
            to: cmd.owner_email,
            to_name: Some(cmd.owner_name),
            subject: content.subject,
            html_body: content.html_body,
        };
        match self.mailer.send(message).await {
            Ok(handle) => {
                debug!(message_id = %handle.message_id, "owner confirmation email sent")
            }
            Err(e) => warn!(
                trip_id = %trip.id(),
                error = %e,
                "failed to send owner confirmation email"
            ),
        }

        Ok(CreateTripResult {
            trip_id: *trip.id(),
        })
    }
}
