//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `trip` - Trip aggregate, participants, and confirmation lifecycle
//! - `activity` - Activities scheduled within a trip's date range

pub mod activity;
pub mod foundation;
pub mod trip;
