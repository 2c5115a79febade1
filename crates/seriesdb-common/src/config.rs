//! Configuration types for SeriesDB
//!
//! This module defines configuration structures used across components.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default sweep period for retention enforcement (30 minutes)
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 30 * 60;

/// Retention enforcement configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Whether retention enforcement runs at all
    pub enabled: bool,
    /// Sweep period shared by the shard-group and shard reapers, in seconds
    pub check_interval_secs: u64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            check_interval_secs: DEFAULT_CHECK_INTERVAL_SECS,
        }
    }
}

impl RetentionConfig {
    /// The sweep period as a [`Duration`]
    #[must_use]
    pub const fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }
}
