//! Error types for dictc
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

/// Unified error type for dictc operations
#[derive(Debug, Error)]
pub enum DictError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// Malformed server output: bad status line, missing terminator,
    /// peer closed mid-response, definition-count mismatch.
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    /// The server answered with a status code that ends the current
    /// exchange: failed handshake, invalid database or strategy, or any
    /// code not mapped for the operation in flight.
    #[error("Connection error: {0}")]
    Connection(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DictError {
    /// Connection error for an unexpected status code on `operation`
    pub fn unexpected_status(operation: &str, code: u16, message: &str) -> Self {
        DictError::Connection(format!(
            "{operation}: unexpected status {code} {message}"
        ))
    }
}
