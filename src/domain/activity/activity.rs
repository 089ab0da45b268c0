//! Activity entity.

use crate::domain::foundation::{ActivityId, Timestamp, TripId};
use serde::{Deserialize, Serialize};

use super::ActivityError;

/// Minimum length for an activity title, enforced at the HTTP adapter.
pub const MIN_ACTIVITY_TITLE_LENGTH: usize = 4;

/// A titled event scheduled at a specific instant within a trip's span.
///
/// Activities are created once and never mutated or deleted. Whether
/// `occurs_at` falls within the owning trip's span is checked against the
/// `Trip` aggregate before creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier for this activity.
    id: ActivityId,

    /// Trip this activity belongs to.
    trip_id: TripId,

    /// What happens.
    title: String,

    /// When it happens.
    occurs_at: Timestamp,
}

impl Activity {
    /// Create a new activity.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the title is empty
    pub fn new(
        id: ActivityId,
        trip_id: TripId,
        title: String,
        occurs_at: Timestamp,
    ) -> Result<Self, ActivityError> {
        if title.trim().is_empty() {
            return Err(ActivityError::validation("title", "must not be empty"));
        }
        Ok(Self {
            id,
            trip_id,
            title,
            occurs_at,
        })
    }

    /// Reconstitute an activity from persistence (no validation).
    pub fn reconstitute(
        id: ActivityId,
        trip_id: TripId,
        title: String,
        occurs_at: Timestamp,
    ) -> Self {
        Self {
            id,
            trip_id,
            title,
            occurs_at,
        }
    }

    /// Returns the activity ID.
    pub fn id(&self) -> &ActivityId {
        &self.id
    }

    /// Returns the owning trip's ID.
    pub fn trip_id(&self) -> &TripId {
        &self.trip_id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns when the activity occurs.
    pub fn occurs_at(&self) -> &Timestamp {
        &self.occurs_at
    }
}
