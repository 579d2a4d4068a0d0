//! Error types for the bot core.
//!
//! [`DbotError`] is the error of every core operation; storage failures arrive already flattened to
//! [`DbotError::Database`] by the handler that hit them.

use thiserror::Error;

/// Top-level error for dbot (database, transport, config).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Database error: {0}")]
    Database(String),

    /// Remote API call failed: network, timeout, non-2xx or unreadable body.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
