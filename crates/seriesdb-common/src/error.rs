//! Error types for SeriesDB
//!
//! This module defines the common error types used throughout the system.

use crate::types::{ShardGroupId, ShardId};
use thiserror::Error;

/// Common result type for SeriesDB operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for SeriesDB
#[derive(Debug, Error)]
pub enum Error {
    // Storage errors
    #[error("disk I/O error: {0}")]
    DiskIo(#[from] std::io::Error),

    #[error("shard not found: {0}")]
    ShardNotFound(ShardId),

    #[error("storage error: {0}")]
    Storage(String),

    // Metadata errors
    #[error("database not found: {0}")]
    DatabaseNotFound(String),

    #[error("retention policy not found: {database}/{policy}")]
    RetentionPolicyNotFound { database: String, policy: String },

    #[error("shard group not found: {database}/{policy}/{id}")]
    ShardGroupNotFound {
        database: String,
        policy: String,
        id: ShardGroupId,
    },

    #[error("metadata error: {0}")]
    Meta(String),

    // Configuration errors
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
