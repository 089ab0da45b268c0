//! Participant entity.
//!
//! A participant belongs to exactly one trip. The owner is created
//! pre-confirmed; invited participants confirm through an emailed link.

use crate::domain::foundation::{ParticipantId, TripId};
use serde::{Deserialize, Serialize};

use super::TripError;

/// A person owning or invited to a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier for this participant.
    id: ParticipantId,

    /// Trip this participant belongs to.
    trip_id: TripId,

    /// Display name; only known for the owner at creation time.
    name: Option<String>,

    /// Email address the confirmation link is sent to.
    email: String,

    /// Whether this participant created the trip.
    is_owner: bool,

    /// Whether attendance has been confirmed.
    is_confirmed: bool,
}

impl Participant {
    /// Create the trip owner. Owners start confirmed.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the email is not plausibly an address
    pub fn owner(
        id: ParticipantId,
        trip_id: TripId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, TripError> {
        let email = email.into();
        validate_email(&email)?;
        Ok(Self {
            id,
            trip_id,
            name: Some(name.into()),
            email,
            is_owner: true,
            is_confirmed: true,
        })
    }

    /// Create an invited participant. Invitees start unconfirmed.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the email is not plausibly an address
    pub fn invited(
        id: ParticipantId,
        trip_id: TripId,
        email: impl Into<String>,
    ) -> Result<Self, TripError> {
        let email = email.into();
        validate_email(&email)?;
        Ok(Self {
            id,
            trip_id,
            name: None,
            email,
            is_owner: false,
            is_confirmed: false,
        })
    }

    /// Reconstitute a participant from persistence (no validation).
    pub fn reconstitute(
        id: ParticipantId,
        trip_id: TripId,
        name: Option<String>,
        email: String,
        is_owner: bool,
        is_confirmed: bool,
    ) -> Self {
        Self {
            id,
            trip_id,
            name,
            email,
            is_owner,
            is_confirmed,
        }
    }

    /// Returns the participant ID.
    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    /// Returns the owning trip's ID.
    pub fn trip_id(&self) -> &TripId {
        &self.trip_id
    }

    /// Returns the display name, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns whether this participant owns the trip.
    pub fn is_owner(&self) -> bool {
        self.is_owner
    }

    /// Returns whether attendance has been confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.is_confirmed
    }

    /// Confirms attendance. Returns false if already confirmed.
    ///
    /// Confirmation is terminal; there is no reverse transition.
    pub fn confirm(&mut self) -> bool {
        if self.is_confirmed {
            return false;
        }
        self.is_confirmed = true;
        true
    }
}

fn validate_email(email: &str) -> Result<(), TripError> {
    let plausible = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !plausible {
        return Err(TripError::validation("email", "must be a valid email address"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_starts_confirmed() {
        let p = Participant::owner(ParticipantId::new(), TripId::new(), "Ana", "ana@example.com")
            .unwrap();
        assert!(p.is_owner());
        assert!(p.is_confirmed());
        assert_eq!(p.name(), Some("Ana"));
    }

    #[test]
    fn invitee_starts_unconfirmed() {
        let p = Participant::invited(ParticipantId::new(), TripId::new(), "bob@example.com")
            .unwrap();
        assert!(!p.is_owner());
        assert!(!p.is_confirmed());
        assert!(p.name().is_none());
    }

    #[test]
    fn rejects_implausible_email() {
        assert!(Participant::invited(ParticipantId::new(), TripId::new(), "not-an-email").is_err());
        assert!(Participant::invited(ParticipantId::new(), TripId::new(), "@example.com").is_err());
        assert!(Participant::invited(ParticipantId::new(), TripId::new(), "a@nodot").is_err());
        assert!(Participant::owner(ParticipantId::new(), TripId::new(), "Ana", "").is_err());
    }

    #[test]
    fn confirm_flips_once_then_noops() {
        let mut p = Participant::invited(ParticipantId::new(), TripId::new(), "bob@example.com")
            .unwrap();

        assert!(p.confirm());
        assert!(p.is_confirmed());
        assert!(!p.confirm());
        assert!(p.is_confirmed());
    }

    #[test]
    fn reconstitute_preserves_fields() {
        let original =
            Participant::invited(ParticipantId::new(), TripId::new(), "bob@example.com").unwrap();
        let copy = Participant::reconstitute(
            *original.id(),
            *original.trip_id(),
            original.name().map(String::from),
            original.email().to_string(),
            original.is_owner(),
            original.is_confirmed(),
        );
        assert_eq!(original, copy);
    }
}
