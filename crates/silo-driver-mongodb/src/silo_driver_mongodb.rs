//! MongoDB driver for the silo session pool
//!
//! Implements the silo driver traits over the official MongoDB Rust driver.
//! The pool treats the address, the dialed handle and the bound collection
//! as opaque; this crate is where they become real MongoDB objects.
//!
//! # Example
//!
//! ```ignore
//! use silo_driver_mongodb::MongoDriver;
//! use silo_session::{PoolConfig, SessionPool};
//!
//! let driver = MongoDriver::new();
//! let pool = SessionPool::connect(
//!     &driver,
//!     "app",
//!     "mongodb://localhost:27017",
//!     PoolConfig::default(),
//! )
//! .await?;
//!
//! let orders = pool.acquire("orders").await;
//! ```

mod driver;
#[cfg(test)]
mod driver_tests;

pub use driver::*;
