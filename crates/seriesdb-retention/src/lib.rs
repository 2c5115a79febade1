//! SeriesDB Retention - Retention policy enforcement service
//!
//! This crate implements the background service that enforces storage
//! retention. Two independently scheduled reapers run concurrently:
//!
//! - the shard-group reaper deletes the metadata entries of shard groups
//!   that have aged past their policy's retention window, and
//! - the shard reaper reconciles physical shards against metadata-deleted
//!   shard groups and removes the orphaned ones from storage.
//!
//! The service only orchestrates when and in what order deletions are
//! attempted. What counts as expired is decided by the metadata layer
//! (see `seriesdb-meta`), and the physical deletion I/O is behind the
//! [`ShardStore`] trait. Per-item deletion failures are logged and the
//! sweep moves on; every sweep recomputes its deletion set from scratch,
//! so a failed item is retried on the next activation for as long as the
//! underlying condition holds.

pub mod client;
pub mod service;

mod reaper;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{MetaClient, ShardStore};
pub use service::RetentionService;
