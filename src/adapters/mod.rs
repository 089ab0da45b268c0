//! Adapters - infrastructure implementations of the ports.
//!
//! - `http` - axum REST surface
//! - `postgres` - sqlx repository implementations
//! - `email` - Resend mailer and a recording mailer for tests
//! - `memory` - in-memory store for tests and local development

pub mod email;
pub mod http;
pub mod memory;
pub mod postgres;
