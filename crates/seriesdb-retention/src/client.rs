//! Collaborator traits consumed by the retention service.
//!
//! The service never touches metadata or disk directly; it sees the
//! cluster through these two seams. Both are assumed safe for concurrent
//! use by the two reapers and by any admin surface issuing force
//! triggers.

use async_trait::async_trait;
use seriesdb_common::{Result, ShardGroupId, ShardId};
use seriesdb_meta::DatabaseInfo;

/// Read and write access to cluster metadata
#[async_trait]
pub trait MetaClient: Send + Sync {
    /// Snapshot of all databases, their policies, and their shard groups
    async fn databases(&self) -> Vec<DatabaseInfo>;

    /// Remove a shard group's metadata entry, identified by its
    /// (database, policy, group id) triple
    async fn delete_shard_group(
        &self,
        database: &str,
        policy: &str,
        id: ShardGroupId,
    ) -> Result<()>;
}

/// Access to the physical shard storage layer
#[async_trait]
pub trait ShardStore: Send + Sync {
    /// All shard ids currently resident in physical storage
    async fn shard_ids(&self) -> Vec<ShardId>;

    /// Delete one shard's physical data
    async fn delete_shard(&self, id: ShardId) -> Result<()>;
}
