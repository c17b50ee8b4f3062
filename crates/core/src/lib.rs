//! Core types and configuration for the RupeeRush contest pipeline.
//!
//! This crate provides shared types used across all other crates:
//! - Canonical contest records and their derived enums
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{ApiConfig, Config, NormalizerConfig};
pub use error::{Error, Result};
pub use types::*;
