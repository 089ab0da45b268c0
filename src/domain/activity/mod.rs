//! Activity module - events scheduled within a trip's date range.

mod activity;
mod errors;
mod schedule;

pub use activity::{Activity, MIN_ACTIVITY_TITLE_LENGTH};
pub use errors::ActivityError;
pub use schedule::{bucket_by_day, DaySchedule};
