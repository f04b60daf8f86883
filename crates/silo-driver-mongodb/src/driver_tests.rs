//! Unit tests for the MongoDB driver
//!
//! Everything here runs offline: the MongoDB client connects lazily, so
//! sessions can be constructed and bound without a server. Tests that need
//! a live deployment are `#[ignore]`d and expect mongod on localhost:27017.

use super::*;
use mongodb::Client;
use mongodb::options::ClientOptions;
use silo_core::{Collection, ConsistencyMode, DialOptions, Session, SessionDriver, SiloError};
use silo_session::{PoolConfig, SessionPool};

async fn offline_session() -> MongoSession {
    let options = ClientOptions::parse("mongodb://localhost:27017")
        .await
        .expect("parse address");
    let client = Client::with_options(options).expect("create client");
    MongoSession::new(client)
}

#[test]
fn test_driver_name() {
    let driver = MongoDriver::new();
    assert_eq!(driver.name(), "mongodb");
}

#[test]
fn test_default_dial_options() {
    let options = DialOptions::default();
    assert_eq!(options.consistency, ConsistencyMode::Monotonic);
    assert_eq!(options.transport_pool_limit, 512);
}

#[tokio::test]
async fn test_dial_rejects_malformed_address() {
    let driver = MongoDriver::new();
    let result = driver.dial("not-a-mongodb-url", &DialOptions::default()).await;
    assert!(matches!(result, Err(SiloError::InvalidAddress(_))));
}

#[tokio::test]
async fn test_session_binds_namespace() {
    let session = offline_session().await;
    let collection = session.bind("app", "orders");

    assert_eq!(collection.database(), "app");
    assert_eq!(collection.name(), "orders");
    assert_eq!(collection.namespace(), "app.orders");

    let mongo = collection
        .as_any()
        .downcast_ref::<MongoCollection>()
        .expect("mongo collection");
    assert_eq!(mongo.inner().name(), "orders");
}

#[tokio::test]
async fn test_fork_is_independent_of_source_close() {
    let session = offline_session().await;
    let fork = session.fork();

    session.close().await.expect("close");
    assert!(session.is_closed());
    assert!(!fork.is_closed());
}

#[tokio::test]
async fn test_refresh_after_close_is_a_session_fault() {
    let session = offline_session().await;
    session.close().await.expect("close");

    let result = session.refresh().await;
    assert!(matches!(result, Err(SiloError::Session(_))));
}

#[tokio::test]
#[ignore = "requires mongod on localhost:27017"]
async fn test_dial_and_refresh_against_live_server() {
    let driver = MongoDriver::new();
    let session = driver
        .dial("mongodb://localhost:27017", &DialOptions::default())
        .await
        .expect("dial");

    session.refresh().await.expect("refresh");
    session.close().await.expect("close");
}

#[tokio::test]
#[ignore = "requires mongod on localhost:27017"]
async fn test_pool_end_to_end_against_live_server() {
    let driver = MongoDriver::new();
    let pool = SessionPool::connect(
        &driver,
        "silo_test",
        "mongodb://localhost:27017",
        PoolConfig::new(8),
    )
    .await
    .expect("connect pool");

    let orders = pool.acquire("orders").await;
    assert_eq!(orders.namespace(), "silo_test.orders");

    pool.close().await;
}
