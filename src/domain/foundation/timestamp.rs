//! Timestamp value object for immutable points in time.
//!
//! Carries the calendar arithmetic the trip domain needs: day-granularity
//! comparisons for activity bounds, whole-day differences and enumeration
//! for the day-bucketed schedule, and pt-BR long-date formatting for the
//! email bodies.

use chrono::{DateTime, Duration, Locale, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another (instant comparison).
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another (instant comparison).
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Checks if both timestamps fall on the same UTC calendar day.
    pub fn is_same_day(&self, other: &Timestamp) -> bool {
        self.0.date_naive() == other.0.date_naive()
    }

    /// Checks if this timestamp falls on an earlier UTC calendar day.
    pub fn is_before_day(&self, other: &Timestamp) -> bool {
        self.0.date_naive() < other.0.date_naive()
    }

    /// Checks if this timestamp falls on a later UTC calendar day.
    pub fn is_after_day(&self, other: &Timestamp) -> bool {
        self.0.date_naive() > other.0.date_naive()
    }

    /// Returns the number of whole calendar days from self to `other`.
    ///
    /// Positive when `other` is on a later day, negative when earlier.
    pub fn diff_in_days(&self, other: &Timestamp) -> i64 {
        (other.0.date_naive() - self.0.date_naive()).num_days()
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days. The time of day is preserved.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Enumerates one timestamp per calendar day from self through `end`,
    /// inclusive on both sides.
    ///
    /// Each item preserves self's time of day. Yields nothing when `end`
    /// falls on an earlier day. The iterator is `Clone`, so it can be
    /// restarted.
    pub fn days_until(&self, end: &Timestamp) -> DayIter {
        DayIter {
            current: *self,
            remaining: self.diff_in_days(end) + 1,
        }
    }

    /// Formats the date in pt-BR long form, e.g. "15 de agosto de 2026".
    pub fn format_long_date(&self) -> String {
        self.0
            .format_localized("%-d de %B de %Y", Locale::pt_BR)
            .to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

/// Iterator over consecutive calendar-day timestamps, inclusive.
#[derive(Debug, Clone)]
pub struct DayIter {
    current: Timestamp,
    remaining: i64,
}

impl Iterator for DayIter {
    type Item = Timestamp;

    fn next(&mut self) -> Option<Timestamp> {
        if self.remaining <= 0 {
            return None;
        }
        let item = self.current;
        self.current = self.current.add_days(1);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.max(0) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for DayIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ts(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    #[test]
    fn is_before_and_after_compare_instants() {
        let earlier = ts("2026-08-10T08:00:00Z");
        let later = ts("2026-08-10T09:00:00Z");

        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
    }

    #[test]
    fn is_same_day_ignores_time_of_day() {
        let morning = ts("2026-08-10T08:00:00Z");
        let evening = ts("2026-08-10T22:30:00Z");
        let next_day = ts("2026-08-11T00:00:00Z");

        assert!(morning.is_same_day(&evening));
        assert!(!morning.is_same_day(&next_day));
    }

    #[test]
    fn day_comparisons_use_calendar_days() {
        let late_monday = ts("2026-08-10T23:59:00Z");
        let early_tuesday = ts("2026-08-11T00:01:00Z");

        assert!(late_monday.is_before_day(&early_tuesday));
        assert!(early_tuesday.is_after_day(&late_monday));
        // Same day, different instants: neither before nor after at day level.
        let noon_monday = ts("2026-08-10T12:00:00Z");
        assert!(!late_monday.is_before_day(&noon_monday));
        assert!(!late_monday.is_after_day(&noon_monday));
    }

    #[test]
    fn diff_in_days_counts_calendar_days() {
        let start = ts("2026-08-10T22:00:00Z");
        let end = ts("2026-08-15T06:00:00Z");

        assert_eq!(start.diff_in_days(&end), 5);
        assert_eq!(end.diff_in_days(&start), -5);
        assert_eq!(start.diff_in_days(&start), 0);
    }

    #[test]
    fn days_until_is_inclusive_on_both_ends() {
        let start = ts("2026-08-10T09:00:00Z");
        let end = ts("2026-08-12T18:00:00Z");

        let days: Vec<Timestamp> = start.days_until(&end).collect();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0], start);
        assert_eq!(days[1], start.add_days(1));
        assert_eq!(days[2], start.add_days(2));
    }

    #[test]
    fn days_until_single_day_span_yields_one_item() {
        let start = ts("2026-08-10T09:00:00Z");
        let end = ts("2026-08-10T23:00:00Z");

        assert_eq!(start.days_until(&end).count(), 1);
    }

    #[test]
    fn days_until_is_restartable() {
        let start = ts("2026-08-10T09:00:00Z");
        let end = ts("2026-08-14T09:00:00Z");

        let iter = start.days_until(&end);
        assert_eq!(iter.clone().count(), 5);
        assert_eq!(iter.count(), 5);
    }

    #[test]
    fn days_until_empty_when_end_is_earlier_day() {
        let start = ts("2026-08-10T09:00:00Z");
        let end = ts("2026-08-08T09:00:00Z");

        assert_eq!(start.days_until(&end).count(), 0);
    }

    #[test]
    fn format_long_date_uses_pt_br() {
        let date = ts("2026-08-15T10:00:00Z");
        assert_eq!(date.format_long_date(), "15 de agosto de 2026");

        let january = ts("2026-01-03T10:00:00Z");
        assert_eq!(january.format_long_date(), "3 de janeiro de 2026");
    }

    #[test]
    fn add_days_preserves_time_of_day() {
        let start = ts("2026-08-10T09:30:00Z");
        let shifted = start.add_days(3);

        assert_eq!(shifted, ts("2026-08-13T09:30:00Z"));
        assert_eq!(shifted.minus_days(3), start);
    }

    proptest! {
        #[test]
        fn days_until_length_matches_diff_plus_one(offset_days in 0i64..400) {
            let start = ts("2026-01-01T12:00:00Z");
            let end = start.add_days(offset_days);

            let count = start.days_until(&end).count() as i64;
            prop_assert_eq!(count, start.diff_in_days(&end) + 1);
        }

        #[test]
        fn enumerated_days_are_consecutive(offset_days in 1i64..120) {
            let start = ts("2026-01-01T12:00:00Z");
            let end = start.add_days(offset_days);

            let days: Vec<Timestamp> = start.days_until(&end).collect();
            for pair in days.windows(2) {
                prop_assert_eq!(pair[0].diff_in_days(&pair[1]), 1);
            }
        }
    }
}
