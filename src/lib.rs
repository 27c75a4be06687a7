//! # dictc
//!
//! A client for the DICT dictionary-lookup protocol (RFC 2229):
//! - Persistent TCP connection with welcome handshake
//! - Database and matching-strategy discovery
//! - Word matching and definition retrieval
//! - Strictly synchronous request-then-response exchanges
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Caller (CLI / UI)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  DictConnection                             │
//! │        (mutex-guarded request/response exchange)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Commands   │          │  Responses  │
//!   │ (one line)  │          │ (status +   │
//!   └─────────────┘          │  "."-block) │
//!                            └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod protocol;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DictError, Result};
pub use config::ClientConfig;
pub use client::DictConnection;
pub use model::{Database, DatabaseSelector, Definition, MatchingStrategy};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dictc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default DICT server port (RFC 2229, section 2.1)
pub const DEFAULT_PORT: u16 = 2628;
