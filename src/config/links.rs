//! Public link configuration.
//!
//! Base URLs for the links embedded in confirmation emails: the web front
//! end (post-confirmation redirect target) and this API (confirmation
//! endpoints).

use serde::Deserialize;

use crate::domain::foundation::{ParticipantId, TripId};

use super::error::ValidationError;

/// Base URLs used to build externally visible links
#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    /// Web front end base URL
    #[serde(default = "default_web_base_url")]
    pub web_base_url: String,

    /// This API's public base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl LinksConfig {
    /// Front-end page for a trip; also the post-confirmation redirect.
    pub fn trip_web_url(&self, trip_id: &TripId) -> String {
        format!("{}/trips/{}", self.web_base_url, trip_id)
    }

    /// Link the owner clicks to confirm the trip.
    pub fn trip_confirm_url(&self, trip_id: &TripId) -> String {
        format!("{}/trips/{}/confirm", self.api_base_url, trip_id)
    }

    /// Link a participant clicks to confirm attendance.
    pub fn participant_confirm_url(&self, participant_id: &ParticipantId) -> String {
        format!("{}/participants/{}/confirm", self.api_base_url, participant_id)
    }

    /// Validate link configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for url in [&self.web_base_url, &self.api_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidBaseUrl);
            }
        }
        Ok(())
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            web_base_url: default_web_base_url(),
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_web_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_api_base_url() -> String {
    "http://localhost:3333".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_links_defaults() {
        let config = LinksConfig::default();
        assert_eq!(config.web_base_url, "http://localhost:3000");
        assert_eq!(config.api_base_url, "http://localhost:3333");
    }

    #[test]
    fn test_urls_interpolate_ids() {
        let config = LinksConfig::default();
        let trip_id: TripId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let participant_id: ParticipantId =
            "650e8400-e29b-41d4-a716-446655440000".parse().unwrap();

        assert_eq!(
            config.trip_web_url(&trip_id),
            "http://localhost:3000/trips/550e8400-e29b-41d4-a716-446655440000"
        );
        assert_eq!(
            config.trip_confirm_url(&trip_id),
            "http://localhost:3333/trips/550e8400-e29b-41d4-a716-446655440000/confirm"
        );
        assert_eq!(
            config.participant_confirm_url(&participant_id),
            "http://localhost:3333/participants/650e8400-e29b-41d4-a716-446655440000/confirm"
        );
    }

    #[test]
    fn test_validation_rejects_non_http_urls() {
        let config = LinksConfig {
            web_base_url: "localhost:3000".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(LinksConfig::default().validate().is_ok());
    }
}
