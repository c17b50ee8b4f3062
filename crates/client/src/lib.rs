//! Async client for the upstream contest API.
//!
//! This crate provides:
//! - Listing fetch and normalization bounded by a timeout
//! - Refresh cycles reported to a consumer sink
//! - Contest result submission
//! - Health probe and pass-through sync reports

pub mod client;
pub mod health;
pub mod sink;

pub use client::ContestClient;
pub use health::{ApiStatus, HealthReport, SyncReport};
pub use sink::{ContestSink, ContestStore};
