//! Mailer port - outbound email delivery.
//!
//! Email is a best-effort side effect: callers log failures and never let
//! them invalidate a mutation that already committed.

use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Recipient display name, when known.
    pub to_name: Option<String>,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_body: String,
}

/// Provider-assigned handle for a delivered message.
///
/// Only used for diagnostic logging; the core never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryHandle {
    pub message_id: String,
}

/// Port for the outbound email provider.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message.
    ///
    /// # Errors
    ///
    /// - `EmailError` if the provider rejects or times out
    async fn send(&self, message: EmailMessage) -> Result<DeliveryHandle, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailer_is_object_safe() {
        fn _accepts_dyn(_mailer: &dyn Mailer) {}
    }
}
