//! Planner - Collaborative Trip Planning API
//!
//! This crate implements a REST backend for planning trips: creating a trip,
//! inviting participants by email, confirming attendance via emailed links,
//! and scheduling day-by-day activities within the trip's date range.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
