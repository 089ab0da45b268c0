//! HTTP DTOs for activity endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::activity::{Activity, DaySchedule, MIN_ACTIVITY_TITLE_LENGTH};
use crate::domain::foundation::Timestamp;

use super::super::error::ErrorResponse;

/// Request to schedule an activity.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActivityRequest {
    pub title: String,
    pub occurs_at: Timestamp,
}

impl CreateActivityRequest {
    pub fn validate(&self) -> Result<(), ErrorResponse> {
        if self.title.chars().count() < MIN_ACTIVITY_TITLE_LENGTH {
            return Err(ErrorResponse::bad_request(format!(
                "title must be at least {} characters",
                MIN_ACTIVITY_TITLE_LENGTH
            )));
        }
        Ok(())
    }
}

/// Response for successful activity creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateActivityResponse {
    pub activity_id: String,
}

/// One activity in a schedule response.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityResponse {
    pub id: String,
    pub title: String,
    pub occurs_at: Timestamp,
}

impl From<&Activity> for ActivityResponse {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id().to_string(),
            title: activity.title().to_string(),
            occurs_at: *activity.occurs_at(),
        }
    }
}

/// One calendar day of the trip with its activities.
#[derive(Debug, Clone, Serialize)]
pub struct DayResponse {
    pub date: Timestamp,
    pub activities: Vec<ActivityResponse>,
}

impl From<&DaySchedule> for DayResponse {
    fn from(day: &DaySchedule) -> Self {
        Self {
            date: day.date,
            activities: day.activities.iter().map(ActivityResponse::from).collect(),
        }
    }
}

/// The full day-by-day schedule of a trip.
#[derive(Debug, Clone, Serialize)]
pub struct ListActivitiesResponse {
    pub activities: Vec<DayResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_request() {
        let req: CreateActivityRequest = serde_json::from_str(
            r#"{"title": "Boat tour", "occurs_at": "2026-09-12T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(req.title, "Boat tour");
    }

    #[test]
    fn rejects_short_title() {
        let req: CreateActivityRequest =
            serde_json::from_str(r#"{"title": "Ski", "occurs_at": "2026-09-12T10:00:00Z"}"#)
                .unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn accepts_title_at_minimum_length() {
        let req: CreateActivityRequest =
            serde_json::from_str(r#"{"title": "Hike", "occurs_at": "2026-09-12T10:00:00Z"}"#)
                .unwrap();
        assert!(req.validate().is_ok());
    }
}
