//! Resend implementation of the Mailer port.
//!
//! Sends through the Resend HTTP API. The client carries the configured
//! send timeout, so a stalled provider call errors out instead of holding
//! the caller.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::EmailConfig;
use crate::domain::foundation::DomainError;
use crate::ports::{DeliveryHandle, EmailMessage, Mailer};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Mailer backed by the Resend HTTP API.
pub struct ResendMailer {
    client: reqwest::Client,
    config: EmailConfig,
}

impl ResendMailer {
    /// Creates a new ResendMailer with a timeout-bounded HTTP client.
    ///
    /// # Errors
    ///
    /// - `EmailError` if the HTTP client cannot be constructed
    pub fn new(config: EmailConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.send_timeout())
            .build()
            .map_err(|e| DomainError::email(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, message: EmailMessage) -> Result<DeliveryHandle, DomainError> {
        let to = match &message.to_name {
            Some(name) => format!("{} <{}>", name, message.to),
            None => message.to.clone(),
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.config.resend_api_key)
            .json(&json!({
                "from": self.config.from_header(),
                "to": [to],
                "subject": message.subject,
                "html": message.html_body,
            }))
            .send()
            .await
            .map_err(|e| DomainError::email(format!("Resend request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::email(format!(
                "Resend returned {}: {}",
                status, body
            )));
        }

        let parsed: SendResponse = response
            .json()
            .await
            .map_err(|e| DomainError::email(format!("Invalid Resend response: {}", e)))?;

        Ok(DeliveryHandle {
            message_id: parsed.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_with_valid_config() {
        let config = EmailConfig {
            resend_api_key: "re_test".to_string(),
            ..Default::default()
        };
        assert!(ResendMailer::new(config).is_ok());
    }

    #[test]
    fn send_response_deserializes() {
        let parsed: SendResponse =
            serde_json::from_str(r#"{"id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}"#).unwrap();
        assert_eq!(parsed.id, "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794");
    }
}
