//! Upstream contest ingestion and normalization.
//!
//! This crate handles:
//! - Reading upstream records in any known schema version
//! - Coercing loosely typed fields with defaults
//! - Deriving status, contest type, asset type and sector from timestamps and titles
//! - Per-record isolation with structured diagnostics

pub mod normalizer;
pub mod raw;
pub mod rules;

pub use normalizer::{normalize_contests, ContestNormalizer, NormalizeIssue, Normalized};
pub use raw::RawContest;
