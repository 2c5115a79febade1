//! SeriesDB Common - Shared types and utilities
//!
//! This crate provides common types, error definitions, and configuration
//! structures used across all SeriesDB components.

pub mod config;
pub mod error;
pub mod types;

pub use config::RetentionConfig;
pub use error::{Error, Result};
pub use types::*;
