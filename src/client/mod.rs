//! Client Module
//!
//! The connection engine: one TCP socket, one outstanding request at a
//! time, status-code-driven response parsing.

mod connection;

pub use connection::DictConnection;
