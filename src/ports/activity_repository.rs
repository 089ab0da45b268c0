//! Activity repository port.

use crate::domain::activity::Activity;
use crate::domain::foundation::{DomainError, TripId};
use async_trait::async_trait;

/// Repository port for Activity persistence.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Save a new activity.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, activity: &Activity) -> Result<(), DomainError>;

    /// Find all activities of a trip, ordered by `occurs_at` ascending.
    async fn find_by_trip(&self, trip_id: &TripId) -> Result<Vec<Activity>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ActivityRepository) {}
    }
}
