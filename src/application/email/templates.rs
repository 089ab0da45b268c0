//! Confirmation email templates.
//!
//! All copy is pt-BR, matching the front end. Dates are rendered in long
//! form ("15 de agosto de 2026") via [`Timestamp::format_long_date`].

use crate::domain::foundation::Timestamp;

/// A rendered subject and HTML body, ready to hand to the mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html_body: String,
}

/// Email asking the trip owner to confirm the trip they just created.
pub fn trip_confirmation(
    destination: &str,
    starts_at: &Timestamp,
    ends_at: &Timestamp,
    confirmation_url: &str,
) -> EmailContent {
    let start = starts_at.format_long_date();
    let end = ends_at.format_long_date();

    EmailContent {
        subject: format!("Confirme sua viagem para {} em {}", destination, start),
        html_body: format!(
            r#"<div style="font-family: sans-serif; font-size: 16px; line-height: 1.6;">
  <p>Você solicitou a criação de uma viagem para <strong>{destination}</strong> entre <strong>{start}</strong> e <strong>{end}</strong>.</p>
  <p></p>
  <p>Para confirmar sua viagem, clique no link abaixo:</p>
  <p></p>
  <p><a href="{confirmation_url}">Confirmar viagem</a></p>
  <p></p>
  <p>Caso você não tenha solicitado essa viagem, por favor, ignore esse email.</p>
</div>"#
        ),
    }
}

/// Email asking an invited participant to confirm their attendance.
pub fn participant_invitation(
    destination: &str,
    starts_at: &Timestamp,
    ends_at: &Timestamp,
    confirmation_url: &str,
) -> EmailContent {
    let start = starts_at.format_long_date();
    let end = ends_at.format_long_date();

    EmailContent {
        subject: format!(
            "Confirme sua presença na viagem para {} em {}",
            destination, start
        ),
        html_body: format!(
            r#"<div style="font-family: sans-serif; font-size: 16px; line-height: 1.6;">
  <p>Você foi convidado(a) para participar de uma viagem para <strong>{destination}</strong> entre <strong>{start}</strong> e <strong>{end}</strong>.</p>
  <p></p>
  <p>Para confirmar sua presença na viagem, clique no link abaixo:</p>
  <p></p>
  <p><a href="{confirmation_url}">Confirmar presença</a></p>
  <p></p>
  <p>Caso você não saiba do que se trata esse email, por favor, ignore-o.</p>
</div>"#
        ),
    }
}
