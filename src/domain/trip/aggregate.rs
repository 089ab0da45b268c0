//! Trip aggregate entity.
//!
//! Trips are the root aggregate: participants and activities belong to
//! exactly one trip and are meaningless without it.
//!
//! # Invariants
//!
//! - `starts_at < ends_at` at creation
//! - `starts_at` is strictly in the future at creation time
//! - `is_confirmed` flips to true at most once; confirming again is a no-op

use crate::domain::foundation::{Timestamp, TripId};
use serde::{Deserialize, Serialize};

use super::TripError;

/// Minimum length for a trip destination, enforced at the HTTP adapter.
pub const MIN_DESTINATION_LENGTH: usize = 4;

/// Minimum length for the owner's name, enforced at the HTTP adapter.
pub const MIN_OWNER_NAME_LENGTH: usize = 4;

/// Trip aggregate - a planned journey to a destination over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for this trip.
    id: TripId,

    /// Where the trip goes.
    destination: String,

    /// When the trip starts.
    starts_at: Timestamp,

    /// When the trip ends.
    ends_at: Timestamp,

    /// Whether the owner has confirmed the trip.
    is_confirmed: bool,

    /// When the trip was created.
    created_at: Timestamp,
}

impl Trip {
    /// Create a new unconfirmed trip.
    ///
    /// `now` is the creation instant; it is passed in rather than read from
    /// the clock so the date rules stay deterministic under test.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the destination is empty
    /// - `InvalidDateRange` if `starts_at` is not in the future
    /// - `InvalidDateRange` if `ends_at` is not after `starts_at`
    pub fn new(
        id: TripId,
        destination: String,
        starts_at: Timestamp,
        ends_at: Timestamp,
        now: Timestamp,
    ) -> Result<Self, TripError> {
        if destination.trim().is_empty() {
            return Err(TripError::validation("destination", "must not be empty"));
        }
        if !starts_at.is_after(&now) {
            return Err(TripError::invalid_date_range(
                "trip start date must be in the future",
            ));
        }
        if !ends_at.is_after(&starts_at) {
            return Err(TripError::invalid_date_range(
                "trip end date must be after the start date",
            ));
        }

        Ok(Self {
            id,
            destination,
            starts_at,
            ends_at,
            is_confirmed: false,
            created_at: now,
        })
    }

    /// Reconstitute a trip from persistence (no validation).
    pub fn reconstitute(
        id: TripId,
        destination: String,
        starts_at: Timestamp,
        ends_at: Timestamp,
        is_confirmed: bool,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            destination,
            starts_at,
            ends_at,
            is_confirmed,
            created_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the trip ID.
    pub fn id(&self) -> &TripId {
        &self.id
    }

    /// Returns the destination.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns when the trip starts.
    pub fn starts_at(&self) -> &Timestamp {
        &self.starts_at
    }

    /// Returns when the trip ends.
    pub fn ends_at(&self) -> &Timestamp {
        &self.ends_at
    }

    /// Returns whether the trip has been confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.is_confirmed
    }

    /// Returns when the trip was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Confirms the trip. Returns false if it was already confirmed.
    ///
    /// Confirmation is terminal; there is no reverse transition.
    pub fn confirm(&mut self) -> bool {
        if self.is_confirmed {
            return false;
        }
        self.is_confirmed = true;
        true
    }

    /// Checks that an instant falls within the trip's span at day
    /// granularity, both bounds inclusive.
    ///
    /// # Errors
    ///
    /// - `InvalidDateRange` naming the violated bound
    pub fn check_within_span(&self, at: &Timestamp) -> Result<(), TripError> {
        if at.is_before_day(&self.starts_at) {
            return Err(TripError::invalid_date_range(
                "date falls before the trip start date",
            ));
        }
        if at.is_after_day(&self.ends_at) {
            return Err(TripError::invalid_date_range(
                "date falls after the trip end date",
            ));
        }
        Ok(())
    }
}
