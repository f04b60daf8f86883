//! Single-initialization wrapper for a process-wide pool

use silo_core::{Result, SessionDriver};
use tokio::sync::OnceCell;

use crate::pool::{PoolConfig, SessionPool};

/// Create-once guard around a [`SessionPool`]
///
/// Construction is idempotent: the first `connect` dials and builds the
/// pool, and every later call returns the same instance without dialing,
/// ignoring its arguments. Placing one of these in a `static` gives the
/// process-wide singleton behavior without hidden global state.
///
/// A failed first initialization does not poison the guard; the next
/// `connect` attempts construction again.
pub struct SharedSessionPool {
    cell: OnceCell<SessionPool>,
}

impl SharedSessionPool {
    /// Create an empty guard
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// Get the pool, constructing it on first call
    pub async fn connect(
        &self,
        driver: &dyn SessionDriver,
        database: &str,
        address: &str,
        config: PoolConfig,
    ) -> Result<&SessionPool> {
        self.cell
            .get_or_try_init(|| SessionPool::connect(driver, database, address, config))
            .await
    }

    /// Get the pool if it has already been constructed
    pub fn get(&self) -> Option<&SessionPool> {
        self.cell.get()
    }
}

impl Default for SharedSessionPool {
    fn default() -> Self {
        Self::new()
    }
}
