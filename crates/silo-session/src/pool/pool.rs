//! Session pool implementation

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use parking_lot::RwLock;
use rand::Rng;
use silo_core::{Collection, DialOptions, Result, Session, SessionDriver, SiloError};
use tracing::{info, warn};

use super::config::PoolConfig;
use super::stats::PoolStats;

/// Index of the seed slot, the clone source for recovery
pub const SEED_INDEX: usize = 0;

/// Remap a raw random index so the seed slot is never selected directly
pub(crate) fn select_index(raw: usize) -> usize {
    if raw == SEED_INDEX { SEED_INDEX + 1 } else { raw }
}

/// One pool position: a session handle plus its last-used timestamp
///
/// The lock guards only the pointer copy and swap; it is never held across
/// a driver call, so acquire never blocks beyond a pointer-width critical
/// section. Concurrent callers of the same slot may interleave a refresh
/// with a read, which is the pool's documented best-effort contract.
struct Slot {
    handle: RwLock<Arc<dyn Session>>,
    last_used: AtomicI64,
}

impl Slot {
    fn new(handle: Arc<dyn Session>, now: i64) -> Self {
        Self {
            handle: RwLock::new(handle),
            last_used: AtomicI64::new(now),
        }
    }

    fn handle(&self) -> Arc<dyn Session> {
        self.handle.read().clone()
    }

    fn replace(&self, handle: Arc<dyn Session>) {
        *self.handle.write() = handle;
    }

    fn last_used(&self) -> i64 {
        self.last_used.load(Ordering::Relaxed)
    }

    fn stamp(&self, now: i64) {
        self.last_used.store(now, Ordering::Relaxed);
    }
}

/// A fixed-size pool of session handles to one remote endpoint
///
/// Slots are populated once at construction by forking a single dialed
/// primary handle, then mutated in place for the pool's lifetime: a slot's
/// handle is refreshed when it goes stale and replaced with a fresh fork of
/// the seed handle when it is found broken. There is no checkout/return
/// bookkeeping; selection is random and always returns immediately.
pub struct SessionPool {
    /// Logical database every returned collection is scoped to
    database: String,
    /// Pool configuration
    config: PoolConfig,
    /// Slot array; length fixed after construction
    slots: Vec<Slot>,
    acquires: AtomicU64,
    refreshes: AtomicU64,
    recoveries: AtomicU64,
}

impl SessionPool {
    /// Dial the endpoint and populate every slot
    ///
    /// Opens one primary connection with the default dial options (monotonic
    /// consistency, generous transport cap), forks it into each slot and
    /// stamps every slot with the current time. The primary itself is
    /// dropped after population.
    ///
    /// Fails with [`SiloError::Configuration`] on an empty database name,
    /// [`SiloError::InvalidAddress`] on a malformed address and
    /// [`SiloError::Connection`] on a dial failure. No retry is attempted.
    pub async fn connect(
        driver: &dyn SessionDriver,
        database: &str,
        address: &str,
        config: PoolConfig,
    ) -> Result<Self> {
        if database.is_empty() {
            return Err(SiloError::Configuration(
                "database name must not be empty".into(),
            ));
        }

        let primary = driver.dial(address, &DialOptions::default()).await?;

        let now = unix_now();
        let slots = (0..config.pool_size())
            .map(|_| Slot::new(primary.fork(), now))
            .collect();

        info!(
            driver = driver.name(),
            database,
            size = config.pool_size(),
            "session pool populated"
        );

        Ok(Self {
            database: database.to_string(),
            config,
            slots,
            acquires: AtomicU64::new(0),
            refreshes: AtomicU64::new(0),
            recoveries: AtomicU64::new(0),
        })
    }

    /// Get a working collection reference bound to `collection`
    ///
    /// Picks a slot uniformly at random (the seed slot remaps to its
    /// neighbor), refreshes the handle first if it is older than the session
    /// timeout, and binds the collection from it. A faulted handle is
    /// replaced with a fresh fork of the seed and the fork is used instead;
    /// the caller never observes an error. A request landing exactly during
    /// a concurrent recovery may still get a momentarily broken handle.
    pub async fn acquire(&self, collection: &str) -> Arc<dyn Collection> {
        let raw = rand::thread_rng().gen_range(0..self.slots.len());
        self.acquire_at(select_index(raw), collection).await
    }

    /// Selection-and-refresh sequence for one already-chosen slot
    pub(crate) async fn acquire_at(&self, index: usize, collection: &str) -> Arc<dyn Collection> {
        self.acquires.fetch_add(1, Ordering::Relaxed);

        let slot = &self.slots[index];
        let handle = slot.handle();
        let now = unix_now();

        match self.freshen(index, slot, &handle, now).await {
            Ok(()) => {
                slot.stamp(now);
                handle.bind(&self.database, collection)
            }
            Err(err) => {
                warn!(index, error = %err, "session fault during acquire, recovering from seed");
                let replacement = self.recover(index).await;
                replacement.bind(&self.database, collection)
            }
        }
    }

    /// Fault-check the handle and refresh it in place if stale
    async fn freshen(
        &self,
        index: usize,
        slot: &Slot,
        handle: &Arc<dyn Session>,
        now: i64,
    ) -> Result<()> {
        if handle.is_closed() {
            return Err(SiloError::Session("handle is closed".into()));
        }

        let age = now - slot.last_used();
        if age > self.config.session_timeout_secs() as i64 {
            info!(index, age_secs = age, "refreshing stale session");
            handle.refresh().await?;
            self.refreshes.fetch_add(1, Ordering::Relaxed);
        }

        Ok(())
    }

    /// Replace a faulted slot with a fresh fork of the seed handle
    ///
    /// Single-attempt: a seed refresh failure is logged and the fork is
    /// taken anyway. The failed slot's timestamp is left untouched, so the
    /// next acquire of that slot may refresh the fresh fork once.
    async fn recover(&self, index: usize) -> Arc<dyn Session> {
        self.recoveries.fetch_add(1, Ordering::Relaxed);

        let seed = self.slots[SEED_INDEX].handle();
        if let Err(err) = seed.refresh().await {
            warn!(error = %err, "seed refresh failed, forking it as-is");
        }

        let replacement = seed.fork();
        self.slots[index].replace(replacement.clone());
        replacement
    }

    /// Close every slot's handle
    ///
    /// Close errors are logged and do not abort the loop. Not synchronized
    /// against in-flight acquires; behavior of acquire after close is
    /// undefined.
    pub async fn close(&self) {
        for (index, slot) in self.slots.iter().enumerate() {
            if let Err(err) = slot.handle().close().await {
                warn!(index, error = %err, "error closing pooled session");
            }
        }
    }

    /// Get current pool statistics
    pub fn stats(&self) -> PoolStats {
        PoolStats::new(
            self.slots.len(),
            self.acquires.load(Ordering::Relaxed),
            self.refreshes.load(Ordering::Relaxed),
            self.recoveries.load(Ordering::Relaxed),
        )
    }

    /// Get the logical database name
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Get the pool configuration
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }
}

#[cfg(test)]
impl SessionPool {
    pub(crate) fn handle_at(&self, index: usize) -> Arc<dyn Session> {
        self.slots[index].handle()
    }

    pub(crate) fn last_used_at(&self, index: usize) -> i64 {
        self.slots[index].last_used()
    }

    pub(crate) fn backdate(&self, index: usize, secs: i64) {
        let slot = &self.slots[index];
        slot.stamp(slot.last_used() - secs);
    }
}

fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}
