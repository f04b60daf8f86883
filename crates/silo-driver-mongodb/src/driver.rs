//! MongoDB driver implementation

use async_trait::async_trait;
use bson::{Document, doc};
use mongodb::options::{ClientOptions, ReadConcern};
use mongodb::Client;
use silo_core::{
    Collection, ConsistencyMode, DialOptions, Result, Session, SessionDriver, SiloError,
};
use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// MongoDB session driver
///
/// Dials a MongoDB deployment from a `mongodb://` connection string and
/// mints [`MongoSession`] handles for the pool.
pub struct MongoDriver;

impl MongoDriver {
    /// Create a new MongoDB driver instance
    pub fn new() -> Self {
        tracing::debug!("MongoDB driver initialized");
        Self
    }
}

impl Default for MongoDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionDriver for MongoDriver {
    fn name(&self) -> &'static str {
        "mongodb"
    }

    #[tracing::instrument(skip_all)]
    async fn dial(&self, address: &str, options: &DialOptions) -> Result<Arc<dyn Session>> {
        tracing::debug!("dialing MongoDB");

        let mut client_options = ClientOptions::parse(address).await.map_err(|e| {
            SiloError::InvalidAddress(format!("failed to parse MongoDB address: {}", e))
        })?;

        client_options.max_pool_size = Some(options.transport_pool_limit);
        client_options.read_concern = Some(match options.consistency {
            ConsistencyMode::Eventual => ReadConcern::available(),
            ConsistencyMode::Monotonic => ReadConcern::local(),
            ConsistencyMode::Strong => ReadConcern::majority(),
        });

        let client = Client::with_options(client_options).map_err(|e| {
            SiloError::Connection(format!("failed to create MongoDB client: {}", e))
        })?;

        // The client connects lazily; probe it so an unreachable server
        // fails the dial instead of the first acquire
        client
            .list_database_names()
            .await
            .map_err(|e| SiloError::Connection(format!("failed to connect to MongoDB: {}", e)))?;

        Ok(Arc::new(MongoSession::new(client)))
    }
}

/// MongoDB session handle implementing the Session trait
///
/// Forks share the driver's underlying topology, so a fork carries the same
/// credentials and read concern as its source. Close flips a local flag and
/// lets the client release transport resources once the last fork drops;
/// shutting the shared topology down eagerly would break sibling forks.
pub struct MongoSession {
    client: Client,
    closed: AtomicBool,
}

impl MongoSession {
    /// Create a new session handle over an already-dialed client
    pub fn new(client: Client) -> Self {
        Self {
            client,
            closed: AtomicBool::new(false),
        }
    }

    /// Get the underlying MongoDB client
    pub fn client(&self) -> &Client {
        &self.client
    }

    fn ensure_not_closed(&self) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(SiloError::Session("session is closed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Session for MongoSession {
    fn driver_name(&self) -> &str {
        "mongodb"
    }

    fn fork(&self) -> Arc<dyn Session> {
        Arc::new(MongoSession::new(self.client.clone()))
    }

    async fn refresh(&self) -> Result<()> {
        self.ensure_not_closed()?;
        // Round-trip to the server, surfacing transport faults synchronously
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| SiloError::Session(format!("failed to refresh MongoDB session: {}", e)))?;
        Ok(())
    }

    fn bind(&self, database: &str, collection: &str) -> Arc<dyn Collection> {
        let inner = self
            .client
            .database(database)
            .collection::<Document>(collection);
        Arc::new(MongoCollection {
            inner,
            database: database.to_string(),
            name: collection.to_string(),
        })
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Collection reference scoped to one `database.collection` namespace
pub struct MongoCollection {
    inner: mongodb::Collection<Document>,
    database: String,
    name: String,
}

impl MongoCollection {
    /// Get the underlying MongoDB collection
    pub fn inner(&self) -> &mongodb::Collection<Document> {
        &self.inner
    }
}

impl Collection for MongoCollection {
    fn database(&self) -> &str {
        &self.database
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
