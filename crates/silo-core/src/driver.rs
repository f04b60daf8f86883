//! Data-store driver trait definition

use crate::{Result, Session};
use async_trait::async_trait;
use std::sync::Arc;

/// Consistency mode requested for dialed sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsistencyMode {
    /// Reads may be served by any member and can go back in time
    Eventual,
    /// Reads never go back in time within a session
    #[default]
    Monotonic,
    /// Reads observe the most recent acknowledged write
    Strong,
}

/// Options applied to the primary connection when dialing
#[derive(Debug, Clone)]
pub struct DialOptions {
    /// Consistency mode configured on the dialed session
    pub consistency: ConsistencyMode,
    /// Cap on the driver's underlying transport connections
    pub transport_pool_limit: u32,
}

impl Default for DialOptions {
    fn default() -> Self {
        Self {
            consistency: ConsistencyMode::Monotonic,
            transport_pool_limit: 512,
        }
    }
}

/// Core driver trait that all data-store drivers must implement
///
/// The driver is an external collaborator: it owns address grammar, the wire
/// protocol, authentication and query execution. The pool only asks it to
/// dial, then works with the returned opaque [`Session`] handles.
#[async_trait]
pub trait SessionDriver: Send + Sync {
    /// Unique identifier for this driver (e.g., "mongodb")
    fn name(&self) -> &'static str;

    /// Parse `address`, open the primary connection and configure it
    ///
    /// The address is an opaque string in the driver's own URL grammar.
    /// Returns [`crate::SiloError::InvalidAddress`] if it is malformed and
    /// [`crate::SiloError::Connection`] if the dial fails.
    async fn dial(&self, address: &str, options: &DialOptions) -> Result<Arc<dyn Session>>;
}
