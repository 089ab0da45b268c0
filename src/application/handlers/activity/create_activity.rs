//! CreateActivityHandler - Command handler for scheduling an activity.

use std::sync::Arc;

use tracing::info;

use crate::domain::activity::{Activity, ActivityError};
use crate::domain::foundation::{ActivityId, Timestamp, TripId};
use crate::ports::{ActivityRepository, TripRepository};

/// Command to schedule a new activity on a trip.
#[derive(Debug, Clone)]
pub struct CreateActivityCommand {
    pub trip_id: TripId,
    pub title: String,
    pub occurs_at: Timestamp,
}

/// Result of successful activity creation.
#[derive(Debug, Clone)]
pub struct CreateActivityResult {
    pub activity_id: ActivityId,
}

/// Handler for creating activities.
pub struct CreateActivityHandler {
    trips: Arc<dyn TripRepository>,
    activities: Arc<dyn ActivityRepository>,
}

impl CreateActivityHandler {
    pub fn new(trips: Arc<dyn TripRepository>, activities: Arc<dyn ActivityRepository>) -> Self {
        Self { trips, activities }
    }

    pub async fn handle(
        &self,
        cmd: CreateActivityCommand,
    ) -> Result<CreateActivityResult, ActivityError> {
        let trip = self
            .trips
            .find_by_id(&cmd.trip_id)
            .await?
            .ok_or(ActivityError::TripNotFound(cmd.trip_id))?;

        // The activity must fall within the trip's calendar span.
        trip.check_within_span(&cmd.occurs_at)?;

        let activity = Activity::new(ActivityId::new(), cmd.trip_id, cmd.title, cmd.occurs_at)?;
        self.activities.create(&activity).await?;

        info!(
            activity_id = %activity.id(),
            trip_id = %activity.trip_id(),
            title = activity.title(),
            "activity created"
        );

        Ok(CreateActivityResult {
            activity_id: *activity.id(),
        })
    }
}
