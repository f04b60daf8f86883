//! Pool statistics types

use serde::{Deserialize, Serialize};

/// Counters describing a session pool's activity
///
/// Recovery is deliberately invisible to acquire's callers, so these
/// counters are the non-log surface for observing the self-healing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Number of slots in the pool
    size: usize,
    /// Total acquire calls
    acquires: u64,
    /// Handles refreshed because they exceeded the session timeout
    refreshes: u64,
    /// Handles replaced with a fork of the seed after a fault
    recoveries: u64,
}

impl PoolStats {
    /// Create new pool statistics
    pub fn new(size: usize, acquires: u64, refreshes: u64, recoveries: u64) -> Self {
        Self {
            size,
            acquires,
            refreshes,
            recoveries,
        }
    }

    /// Get the number of slots
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the total number of acquire calls
    pub fn acquires(&self) -> u64 {
        self.acquires
    }

    /// Get the number of staleness refreshes
    pub fn refreshes(&self) -> u64 {
        self.refreshes
    }

    /// Get the number of fault recoveries
    pub fn recoveries(&self) -> u64 {
        self.recoveries
    }

    /// Fraction of acquires that triggered recovery (0.0 to 1.0)
    ///
    /// Returns 0.0 if no acquires have happened to avoid division by zero.
    pub fn recovery_rate(&self) -> f64 {
        if self.acquires == 0 {
            0.0
        } else {
            self.recoveries as f64 / self.acquires as f64
        }
    }
}

impl Default for PoolStats {
    fn default() -> Self {
        Self::new(0, 0, 0, 0)
    }
}
