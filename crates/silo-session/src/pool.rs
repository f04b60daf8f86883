//! Session pooling for data-store handles
//!
//! This module provides the fixed-size session pool with staleness refresh,
//! failure recovery and statistics tracking.
//!
//! # Example
//!
//! ```ignore
//! use silo_session::pool::{PoolConfig, SessionPool};
//!
//! let config = PoolConfig::default(); // 128 slots, 3 hour session timeout
//! let pool = SessionPool::connect(&driver, "app", "mongodb://localhost:27017", config).await?;
//!
//! let orders = pool.acquire("orders").await;
//! // Use the collection reference...
//! ```

mod config;
mod pool;
mod stats;


pub use config::{DEFAULT_POOL_SIZE, DEFAULT_SESSION_TIMEOUT_SECS, PoolConfig};
pub use pool::{SEED_INDEX, SessionPool};
pub use stats::PoolStats;
