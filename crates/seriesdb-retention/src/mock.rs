//! In-memory collaborators for tests.
//!
//! Both mocks record every deletion attempt and can be told to fail
//! specific items. Metadata is static: a deletion does not mutate the
//! reported view, which lets tests exercise the recompute-from-scratch
//! behavior across sweeps.

use crate::client::{MetaClient, ShardStore};
use async_trait::async_trait;
use chrono::{Duration as TimeDelta, Utc};
use parking_lot::Mutex;
use seriesdb_common::{Error, Result, ShardGroupId, ShardId};
use seriesdb_meta::{DatabaseInfo, ShardGroupInfo, ShardInfo};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A live shard group whose time range ended `hours_ago` hours ago
pub(crate) fn expired_group(id: u64, hours_ago: i64, shard_ids: &[u64]) -> ShardGroupInfo {
    let end = Utc::now() - TimeDelta::hours(hours_ago);
    ShardGroupInfo {
        id: ShardGroupId::new(id),
        start_time: end - TimeDelta::hours(24),
        end_time: end,
        deleted_at: None,
        shards: shard_ids
            .iter()
            .map(|&id| ShardInfo {
                id: ShardId::new(id),
            })
            .collect(),
    }
}

/// A shard group already removed from the active metadata view
pub(crate) fn orphaned_group(id: u64, shard_ids: &[u64]) -> ShardGroupInfo {
    ShardGroupInfo {
        deleted_at: Some(Utc::now()),
        ..expired_group(id, 48, shard_ids)
    }
}

#[derive(Default)]
pub(crate) struct MockMetaClient {
    databases: Mutex<Vec<DatabaseInfo>>,
    deleted: Mutex<Vec<(String, String, ShardGroupId)>>,
    fail: Mutex<HashSet<ShardGroupId>>,
    delete_attempts: AtomicUsize,
    databases_calls: AtomicUsize,
}

impl MockMetaClient {
    pub(crate) fn new(databases: Vec<DatabaseInfo>) -> Self {
        Self {
            databases: Mutex::new(databases),
            ..Self::default()
        }
    }

    /// Make `delete_shard_group` fail for this group id
    pub(crate) fn fail_group(&self, id: ShardGroupId) {
        self.fail.lock().insert(id);
    }

    pub(crate) fn clear_failures(&self) {
        self.fail.lock().clear();
    }

    /// Successful deletions, in call order
    pub(crate) fn deleted_groups(&self) -> Vec<(String, String, ShardGroupId)> {
        self.deleted.lock().clone()
    }

    /// Total `delete_shard_group` calls, successful or not
    pub(crate) fn delete_attempts(&self) -> usize {
        self.delete_attempts.load(Ordering::SeqCst)
    }

    pub(crate) fn databases_calls(&self) -> usize {
        self.databases_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetaClient for MockMetaClient {
    async fn databases(&self) -> Vec<DatabaseInfo> {
        self.databases_calls.fetch_add(1, Ordering::SeqCst);
        self.databases.lock().clone()
    }

    async fn delete_shard_group(
        &self,
        database: &str,
        policy: &str,
        id: ShardGroupId,
    ) -> Result<()> {
        self.delete_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail.lock().contains(&id) {
            return Err(Error::Meta(format!("metadata store unavailable for group {id}")));
        }
        self.deleted
            .lock()
            .push((database.to_string(), policy.to_string(), id));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockShardStore {
    shard_ids: Mutex<Vec<ShardId>>,
    deleted: Mutex<Vec<ShardId>>,
    fail: Mutex<HashSet<ShardId>>,
    delete_attempts: AtomicUsize,
    shard_ids_calls: AtomicUsize,
}

impl MockShardStore {
    pub(crate) fn new(ids: &[u64]) -> Self {
        Self {
            shard_ids: Mutex::new(ids.iter().map(|&id| ShardId::new(id)).collect()),
            ..Self::default()
        }
    }

    /// Make `delete_shard` fail for this shard id
    pub(crate) fn fail_shard(&self, id: ShardId) {
        self.fail.lock().insert(id);
    }

    pub(crate) fn clear_failures(&self) {
        self.fail.lock().clear();
    }

    /// Successful deletions, in call order
    pub(crate) fn deleted_shards(&self) -> Vec<ShardId> {
        self.deleted.lock().clone()
    }

    /// Total `delete_shard` calls, successful or not
    pub(crate) fn delete_attempts(&self) -> usize {
        self.delete_attempts.load(Ordering::SeqCst)
    }

    pub(crate) fn shard_ids_calls(&self) -> usize {
        self.shard_ids_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShardStore for MockShardStore {
    async fn shard_ids(&self) -> Vec<ShardId> {
        self.shard_ids_calls.fetch_add(1, Ordering::SeqCst);
        self.shard_ids.lock().clone()
    }

    async fn delete_shard(&self, id: ShardId) -> Result<()> {
        self.delete_attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail.lock().contains(&id) {
            return Err(Error::Storage(format!("disk busy deleting shard {id}")));
        }
        self.deleted.lock().push(id);
        Ok(())
    }
}
