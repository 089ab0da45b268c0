//! Recording implementation of the Mailer port.
//!
//! Stores every message in memory instead of delivering it. Used by tests
//! and by local development when no Resend key is configured.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::{DeliveryHandle, EmailMessage, Mailer};

/// Mailer that records messages instead of sending them.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

impl RecordingMailer {
    /// Creates a mailer that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mailer that rejects every message.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Returns a snapshot of the recorded messages.
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Returns how many messages were recorded.
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: EmailMessage) -> Result<DeliveryHandle, DomainError> {
        if self.fail {
            return Err(DomainError::email("Simulated delivery failure"));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push(message);
        Ok(DeliveryHandle {
            message_id: format!("recorded-{}", sent.len()),
        })
    }
}
