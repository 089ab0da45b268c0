//! Participant operation handlers.

mod confirm_participant;
mod create_invite;

pub use confirm_participant::{
    ConfirmParticipantCommand, ConfirmParticipantHandler, ConfirmParticipantResult,
};
pub use create_invite::{CreateInviteCommand, CreateInviteHandler, CreateInviteResult};
