//! Metadata structures for databases, retention policies, and shard groups.
//!
//! A shard group moves through three states: active, expired (past its
//! policy's retention window but still present in metadata), and deleted
//! (removed from the active metadata view, its shards pending physical
//! removal). The derived views on [`RetentionPolicyInfo`] expose the last
//! two states to the retention service.

use chrono::{DateTime, Duration as TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use seriesdb_common::{ShardGroupId, ShardId};
use std::time::Duration;

/// A database and its retention policies
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DatabaseInfo {
    /// Database name
    pub name: String,
    /// Retention policies defined on this database
    pub retention_policies: Vec<RetentionPolicyInfo>,
}

/// A named retention policy and the shard groups it owns
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetentionPolicyInfo {
    /// Policy name
    pub name: String,
    /// How long data is kept. A zero duration means data is kept forever.
    pub duration: Duration,
    /// Shard groups covering this policy's time ranges
    pub shard_groups: Vec<ShardGroupInfo>,
}

impl RetentionPolicyInfo {
    /// Shard groups whose data has aged past the retention window as of
    /// `now` and which are still present in the active metadata view.
    ///
    /// A policy with a zero duration retains data forever and never
    /// reports expired groups.
    #[must_use]
    pub fn expired_shard_groups(&self, now: DateTime<Utc>) -> Vec<&ShardGroupInfo> {
        if self.duration.is_zero() {
            return Vec::new();
        }
        // A retention window too large to represent, or whose cutoff
        // overflows the datetime range, cannot have elapsed.
        let Ok(retention) = TimeDelta::from_std(self.duration) else {
            return Vec::new();
        };
        self.shard_groups
            .iter()
            .filter(|g| {
                !g.is_deleted()
                    && g.end_time
                        .checked_add_signed(retention)
                        .is_some_and(|cutoff| cutoff <= now)
            })
            .collect()
    }

    /// Shard groups already removed from the active metadata view. Their
    /// shards are orphaned until physically deleted.
    #[must_use]
    pub fn deleted_shard_groups(&self) -> Vec<&ShardGroupInfo> {
        self.shard_groups.iter().filter(|g| g.is_deleted()).collect()
    }
}

/// A shard group: the shards covering one time range of one policy
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShardGroupInfo {
    /// Group identifier, unique across the cluster
    pub id: ShardGroupId,
    /// Start of the time range this group covers
    pub start_time: DateTime<Utc>,
    /// End of the time range this group covers
    pub end_time: DateTime<Utc>,
    /// When the group was removed from the active metadata view, if ever
    pub deleted_at: Option<DateTime<Utc>>,
    /// Shards belonging to this group
    pub shards: Vec<ShardInfo>,
}

impl ShardGroupInfo {
    /// Whether this group has been removed from the active metadata view
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// A single shard within a shard group
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ShardInfo {
    /// Shard identifier, unique across the cluster
    pub id: ShardId,
}
