//! Silo Core - Core abstractions for the session pool
//!
//! This crate provides the fundamental traits and types that the other
//! silo crates depend on. It defines:
//!
//! - `SessionDriver` - Trait for data-store driver implementations
//! - `Session` - Trait for an opaque live session handle
//! - `Collection` - Trait for a handle scoped to one logical sub-resource
//! - `SiloError` / `Result` - Common error handling

mod driver;
mod error;
mod session;

pub use driver::*;
pub use error::*;
pub use session::*;
