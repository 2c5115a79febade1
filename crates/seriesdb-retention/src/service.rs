//! Retention enforcement service lifecycle.
//!
//! [`RetentionService`] owns the two reaper loops: it starts them on
//! [`open`](RetentionService::open), hands force triggers to them while
//! running, and joins them on [`close`](RetentionService::close). The
//! caller serializes `open` and `close`; neither is safe to race against
//! the other.

use crate::client::{MetaClient, ShardStore};
use crate::reaper::{ShardGroupReaper, ShardReaper};
use seriesdb_common::RetentionConfig;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// The retention policy enforcement service
pub struct RetentionService {
    config: RetentionConfig,
    meta: Arc<dyn MetaClient>,
    store: Arc<dyn ShardStore>,

    // Single-slot handoff per reaper; a send parks until the loop can
    // accept the request.
    force_groups_tx: mpsc::Sender<()>,
    force_shards_tx: mpsc::Sender<()>,
    force_groups_rx: Option<mpsc::Receiver<()>>,
    force_shards_rx: Option<mpsc::Receiver<()>>,

    shutdown: Option<watch::Sender<bool>>,
    handles: Vec<JoinHandle<()>>,
}

impl RetentionService {
    /// Create a configured service. No background work starts until
    /// [`open`](Self::open).
    #[must_use]
    pub fn new(
        config: RetentionConfig,
        meta: Arc<dyn MetaClient>,
        store: Arc<dyn ShardStore>,
    ) -> Self {
        let (force_groups_tx, force_groups_rx) = mpsc::channel(1);
        let (force_shards_tx, force_shards_rx) = mpsc::channel(1);
        Self {
            config,
            meta,
            store,
            force_groups_tx,
            force_shards_tx,
            force_groups_rx: Some(force_groups_rx),
            force_shards_rx: Some(force_shards_rx),
            shutdown: None,
            handles: Vec::new(),
        }
    }

    /// Start both reaper loops. Returns immediately; starting a loop
    /// cannot fail. Does nothing when retention enforcement is disabled.
    /// The service is one-shot: `open` takes effect once, and a closed
    /// service cannot be reopened.
    pub fn open(&mut self) {
        if !self.config.enabled {
            info!("retention enforcement disabled");
            return;
        }
        let (Some(groups_rx), Some(shards_rx)) =
            (self.force_groups_rx.take(), self.force_shards_rx.take())
        else {
            warn!("retention enforcement can only be opened once; ignoring");
            return;
        };

        let interval = self.config.check_interval();
        info!("starting retention enforcement with check interval {interval:?}");

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        self.handles.push(tokio::spawn(
            ShardGroupReaper::new(Arc::clone(&self.meta)).run(
                interval,
                groups_rx,
                shutdown_rx.clone(),
            ),
        ));
        self.handles.push(tokio::spawn(
            ShardReaper::new(Arc::clone(&self.meta), Arc::clone(&self.store)).run(
                interval,
                shards_rx,
                shutdown_rx,
            ),
        ));
        self.shutdown = Some(shutdown_tx);
    }

    /// Signal both loops to stop and wait for them to exit. An in-flight
    /// sweep finishes first; once `close` returns, no collaborator call
    /// is made again. Calling `close` more than once is harmless.
    pub async fn close(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            info!("retention enforcement terminating");
            let _ = shutdown.send(true);
        }
        for handle in self.handles.drain(..) {
            let _ = handle.await;
        }
    }

    /// Ask the shard-group reaper to sweep now. Completes once the
    /// request is accepted, not once the sweep finishes; if a sweep is
    /// already running, this waits for the loop to take the request.
    /// Requires an open service.
    pub async fn trigger_shard_group_sweep(&self) {
        let _ = self.force_groups_tx.send(()).await;
    }

    /// Ask the shard reaper to sweep now. Same handoff contract as
    /// [`trigger_shard_group_sweep`](Self::trigger_shard_group_sweep).
    pub async fn trigger_shard_sweep(&self) {
        let _ = self.force_shards_tx.send(()).await;
    }
}
