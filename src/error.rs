//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
///
/// A cache miss is never an error; it is reported as `None` by
/// [`Cache::get`](crate::cache::Cache::get).
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Cache constructed outside a Tokio runtime
    #[error("No Tokio runtime available to run the cache reaper")]
    NoRuntime,

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API
    #[error("Failed to fetch {url}: status code {status}")]
    Status { url: String, status: u16 },

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
