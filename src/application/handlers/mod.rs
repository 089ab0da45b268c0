//! Command and query handlers, one per operation.

pub mod activity;
pub mod participant;
pub mod trip;
