//! SeriesDB Meta - Cluster metadata model
//!
//! This crate defines the read-side view of cluster metadata consumed by
//! maintenance services: databases, their retention policies, and the
//! shard groups each policy owns. The expiry and deletion views derived
//! here drive retention enforcement.

pub mod data;

pub use data::{DatabaseInfo, RetentionPolicyInfo, ShardGroupInfo, ShardInfo};
