//! Error types for silo

use thiserror::Error;

/// Core error type for silo operations
///
/// Two tiers: `InvalidAddress`, `Connection` and `Configuration` are
/// construction-time errors surfaced to the caller of pool construction.
/// `Session` is a runtime fault raised by driver calls; the pool consumes
/// it internally during recovery and never returns it from acquire.
#[derive(Error, Debug)]
pub enum SiloError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Session error: {0}")]
    Session(String),
}

/// Result type alias for silo operations
pub type Result<T> = std::result::Result<T, SiloError>;
