//! Pool configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of slots in the pool
pub const DEFAULT_POOL_SIZE: usize = 128;

/// Default session timeout in seconds (3 hours)
pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 60 * 60 * 3;

/// Configuration for a session pool
///
/// Controls the fixed slot count and the staleness threshold. Both default
/// to the baseline constants; neither can change after construction.
///
/// The slot-count invariant holds on every construction path: `new` panics
/// on an undersized pool and deserialization rejects one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PoolConfigRepr")]
pub struct PoolConfig {
    /// Number of slots; fixed for the pool's lifetime
    pool_size: usize,
    /// Age in seconds past which a handle is refreshed before use
    session_timeout_secs: u64,
}

impl PoolConfig {
    /// Create a new pool configuration with the given slot count
    ///
    /// # Panics
    ///
    /// Panics if `pool_size < 2`: slot 0 is reserved as the recovery seed,
    /// so at least one other slot must exist for selection.
    pub fn new(pool_size: usize) -> Self {
        assert!(
            pool_size >= 2,
            "pool_size must be at least 2 (seed slot plus one selectable slot), got {}",
            pool_size
        );

        Self {
            pool_size,
            session_timeout_secs: DEFAULT_SESSION_TIMEOUT_SECS,
        }
    }

    /// Set the session timeout in seconds
    pub fn with_session_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.session_timeout_secs = timeout_secs;
        self
    }

    /// Get the number of slots
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Get the session timeout in seconds
    pub fn session_timeout_secs(&self) -> u64 {
        self.session_timeout_secs
    }

    /// Get the session timeout as a Duration
    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_secs)
    }
}

/// Wire representation, converted through the same slot-count check as `new`
#[derive(Deserialize)]
struct PoolConfigRepr {
    pool_size: usize,
    session_timeout_secs: u64,
}

impl TryFrom<PoolConfigRepr> for PoolConfig {
    type Error = String;

    fn try_from(repr: PoolConfigRepr) -> Result<Self, Self::Error> {
        if repr.pool_size < 2 {
            return Err(format!(
                "pool_size must be at least 2 (seed slot plus one selectable slot), got {}",
                repr.pool_size
            ));
        }

        Ok(Self {
            pool_size: repr.pool_size,
            session_timeout_secs: repr.session_timeout_secs,
        })
    }
}

impl Default for PoolConfig {
    /// Create a default pool configuration
    ///
    /// Defaults:
    /// - pool_size: 128
    /// - session_timeout: 3 hours
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}
