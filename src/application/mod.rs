//! Application layer - one handler per operation, plus email rendering.

pub mod email;
pub mod handlers;
