//! The two reaper loops and their sweep algorithms.
//!
//! Each reaper is single-threaded: it waits on its ticker, its force
//! trigger, or the shutdown signal, and runs one synchronous sweep per
//! activation. A sweep never overlaps another sweep of the same reaper.
//! The two reapers never contend on the same write: metadata deletion is
//! done only by [`ShardGroupReaper`], and [`ShardReaper`] only touches
//! shards whose group is already gone from the active metadata view.

use crate::client::{MetaClient, ShardStore};
use chrono::Utc;
use seriesdb_common::ShardId;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

/// Deletes the metadata entries of expired shard groups
pub(crate) struct ShardGroupReaper {
    meta: Arc<dyn MetaClient>,
}

impl ShardGroupReaper {
    pub(crate) fn new(meta: Arc<dyn MetaClient>) -> Self {
        Self { meta }
    }

    /// Activation loop: sweep on every tick or force trigger, exit on
    /// shutdown. The first tick fires one full interval after start.
    pub(crate) async fn run(
        self,
        interval: Duration,
        mut force: mpsc::Receiver<()>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.changed() => break,
                Some(()) = force.recv() => self.sweep().await,
                _ = ticker.tick() => self.sweep().await,
            }
        }
        debug!("shard group reaper stopped");
    }

    /// One pass: delete every shard group that has aged past its
    /// policy's retention window as of now. A failed deletion is logged
    /// and skipped; it is retried on the next activation for as long as
    /// the group remains expired.
    pub(crate) async fn sweep(&self) {
        let now = Utc::now();
        for db in self.meta.databases().await {
            for rp in &db.retention_policies {
                for group in rp.expired_shard_groups(now) {
                    match self
                        .meta
                        .delete_shard_group(&db.name, &rp.name, group.id)
                        .await
                    {
                        Ok(()) => info!(
                            "deleted shard group {} from database {}, retention policy {}",
                            group.id, db.name, rp.name
                        ),
                        Err(e) => error!(
                            "failed to delete shard group {} from database {}, retention policy {}: {e}",
                            group.id, db.name, rp.name
                        ),
                    }
                }
            }
        }
    }
}

/// Deletes physical shards orphaned by metadata-deleted shard groups
pub(crate) struct ShardReaper {
    meta: Arc<dyn MetaClient>,
    store: Arc<dyn ShardStore>,
}

/// Where an orphaned shard came from, for logging
struct ShardOwner {
    database: String,
    policy: String,
}

impl ShardReaper {
    pub(crate) fn new(meta: Arc<dyn MetaClient>, store: Arc<dyn ShardStore>) -> Self {
        Self { meta, store }
    }

    pub(crate) async fn run(
        self,
        interval: Duration,
        mut force: mpsc::Receiver<()>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.changed() => break,
                Some(()) = force.recv() => self.sweep().await,
                _ = ticker.tick() => self.sweep().await,
            }
        }
        debug!("shard reaper stopped");
    }

    /// One pass: map every shard belonging to a metadata-deleted shard
    /// group to its owning database/policy, then delete the physical
    /// shards that appear in that map. Shards whose group is still in
    /// the active metadata view are never touched.
    pub(crate) async fn sweep(&self) {
        debug!("orphaned shard deletion check commencing");

        let mut orphaned: HashMap<ShardId, ShardOwner> = HashMap::new();
        for db in self.meta.databases().await {
            for rp in &db.retention_policies {
                for group in rp.deleted_shard_groups() {
                    for shard in &group.shards {
                        // Duplicate ids should not occur; last write wins.
                        orphaned.insert(
                            shard.id,
                            ShardOwner {
                                database: db.name.clone(),
                                policy: rp.name.clone(),
                            },
                        );
                    }
                }
            }
        }

        for id in self.store.shard_ids().await {
            let Some(owner) = orphaned.get(&id) else {
                continue;
            };
            match self.store.delete_shard(id).await {
                Ok(()) => info!(
                    "deleted shard {} from database {}, retention policy {}",
                    id, owner.database, owner.policy
                ),
                Err(e) => error!(
                    "failed to delete shard {} from database {}, retention policy {}: {e}",
                    id, owner.database, owner.policy
                ),
            }
        }
    }
}
