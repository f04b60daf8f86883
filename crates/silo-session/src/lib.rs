//! Silo Session - fixed-size session-handle pooling
//!
//! This crate owns a fixed number of long-lived session handles to one
//! remote endpoint, hands out a handle per logical operation, transparently
//! refreshes handles older than the session timeout, and recovers from a
//! broken handle by re-cloning it from the seed handle in slot 0.

pub mod pool;
mod shared;

pub use pool::{PoolConfig, PoolStats, SEED_INDEX, SessionPool};
pub use shared::SharedSessionPool;
