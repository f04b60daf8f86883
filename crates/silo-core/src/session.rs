//! Session and collection handle traits

use crate::Result;
use async_trait::async_trait;
use std::any::Any;
use std::sync::Arc;

/// An opaque live session handle to the remote data store
///
/// Handles are minted by a [`crate::SessionDriver`] and owned by the pool
/// for the process lifetime. Callers receive a scoped [`Collection`]
/// reference per call and must not close the underlying handle themselves.
#[async_trait]
pub trait Session: Send + Sync {
    /// Get the driver name (e.g., "mongodb")
    fn driver_name(&self) -> &str;

    /// Clone this handle into a new, independently usable one
    ///
    /// The fork carries the same credentials and consistency mode as the
    /// original. This is how the pool populates its slots at construction
    /// and how recovery mints a replacement from the seed handle.
    fn fork(&self) -> Arc<dyn Session>;

    /// Re-establish the underlying transport connection in place
    ///
    /// Called when a handle's age exceeds the session timeout, and on the
    /// seed handle before recovery clones from it.
    async fn refresh(&self) -> Result<()>;

    /// Bind a reference scoped to one logical sub-resource
    ///
    /// Pure namespace scoping; performs no I/O and cannot fail.
    fn bind(&self, database: &str, collection: &str) -> Arc<dyn Collection>;

    /// Close the handle, releasing underlying transport resources
    async fn close(&self) -> Result<()>;

    /// Check if the handle has been closed
    fn is_closed(&self) -> bool;
}

/// A handle scoped to one logical sub-resource of the data store
///
/// The pool never interprets the sub-resource's schema or contents; callers
/// that need the driver's concrete collection type downcast via [`as_any`].
///
/// [`as_any`]: Collection::as_any
pub trait Collection: Send + Sync {
    /// Name of the logical database this collection belongs to
    fn database(&self) -> &str;

    /// Name of the collection itself
    fn name(&self) -> &str;

    /// Fully qualified `database.collection` namespace
    fn namespace(&self) -> String {
        format!("{}.{}", self.database(), self.name())
    }

    /// Escape hatch to the driver's concrete collection type
    fn as_any(&self) -> &dyn Any;
}
