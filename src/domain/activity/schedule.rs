//! Day-bucketed activity schedule.
//!
//! The schedule view groups a trip's activities into one bucket per
//! calendar day of the trip's span, including days with no activities.

use crate::domain::foundation::Timestamp;
use serde::Serialize;

use super::Activity;

/// One calendar day of a trip with its activities, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    /// The day this bucket covers.
    pub date: Timestamp,
    /// Activities occurring on that day, ordered by `occurs_at`.
    pub activities: Vec<Activity>,
}

/// Buckets activities by calendar day across `[starts_at, ends_at]`.
///
/// Produces exactly `diff_in_days(starts_at, ends_at) + 1` buckets in
/// chronological order. Days without activities get an empty bucket rather
/// than being omitted. An activity lands in the bucket whose calendar day
/// matches its `occurs_at` (same-day comparison, not exact instant).
pub fn bucket_by_day(
    starts_at: &Timestamp,
    ends_at: &Timestamp,
    activities: &[Activity],
) -> Vec<DaySchedule> {
    starts_at
        .days_until(ends_at)
        .map(|date| {
            let mut on_day: Vec<Activity> = activities
                .iter()
                .filter(|a| a.occurs_at().is_same_day(&date))
                .cloned()
                .collect();
            on_day.sort_by_key(|a| *a.occurs_at());
            DaySchedule {
                date,
                activities: on_day,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ActivityId, TripId};
    use chrono::{DateTime, Utc};

    fn ts(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    fn activity(trip_id: TripId, title: &str, occurs_at: Timestamp) -> Activity {
        Activity::new(ActivityId::new(), trip_id, title.to_string(), occurs_at).unwrap()
    }

    #[test]
    fn produces_one_bucket_per_day_including_empty_days() {
        let starts = ts("2026-08-10T09:00:00Z");
        let ends = ts("2026-08-14T18:00:00Z");

        let schedule = bucket_by_day(&starts, &ends, &[]);

        assert_eq!(schedule.len(), 5);
        assert!(schedule.iter().all(|d| d.activities.is_empty()));
    }

    #[test]
    fn buckets_are_chronological() {
        let starts = ts("2026-08-10T09:00:00Z");
        let ends = ts("2026-08-13T09:00:00Z");

        let schedule = bucket_by_day(&starts, &ends, &[]);

        for pair in schedule.windows(2) {
            assert!(pair[0].date.is_before(&pair[1].date));
        }
    }

    #[test]
    fn activities_land_on_their_calendar_day() {
        let trip_id = TripId::new();
        let starts = ts("2026-08-10T09:00:00Z");
        let ends = ts("2026-08-12T18:00:00Z");

        let activities = vec![
            activity(trip_id, "Check-in", ts("2026-08-10T14:00:00Z")),
            activity(trip_id, "Boat tour", ts("2026-08-12T10:00:00Z")),
        ];

        let schedule = bucket_by_day(&starts, &ends, &activities);

        assert_eq!(schedule[0].activities.len(), 1);
        assert_eq!(schedule[0].activities[0].title(), "Check-in");
        assert!(schedule[1].activities.is_empty());
        assert_eq!(schedule[2].activities.len(), 1);
        assert_eq!(schedule[2].activities[0].title(), "Boat tour");
    }

    #[test]
    fn same_day_activities_sort_by_instant() {
        let trip_id = TripId::new();
        let starts = ts("2026-08-10T09:00:00Z");
        let ends = ts("2026-08-10T22:00:00Z");

        let activities = vec![
            activity(trip_id, "Dinner", ts("2026-08-10T20:00:00Z")),
            activity(trip_id, "Breakfast", ts("2026-08-10T08:00:00Z")),
            activity(trip_id, "Museum", ts("2026-08-10T13:00:00Z")),
        ];

        let schedule = bucket_by_day(&starts, &ends, &activities);

        assert_eq!(schedule.len(), 1);
        let titles: Vec<&str> = schedule[0].activities.iter().map(|a| a.title()).collect();
        assert_eq!(titles, vec!["Breakfast", "Museum", "Dinner"]);
    }

    #[test]
    fn matching_ignores_time_of_day_against_bucket() {
        let trip_id = TripId::new();
        // Trip starts late in the day; an activity earlier that same day
        // still belongs to the first bucket.
        let starts = ts("2026-08-10T22:00:00Z");
        let ends = ts("2026-08-11T08:00:00Z");

        let activities = vec![activity(trip_id, "Arrival", ts("2026-08-10T06:00:00Z"))];

        let schedule = bucket_by_day(&starts, &ends, &activities);

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[0].activities.len(), 1);
    }
}
