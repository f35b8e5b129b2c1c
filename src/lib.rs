//! Pokedex - A command-line Pokedex backed by PokeAPI
//!
//! API responses are kept in an expiring in-memory cache keyed by request URL,
//! so repeated lookups within the TTL skip the network.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use api::PokeApi;
pub use cache::Cache;
pub use config::{CacheConfig, Config};
pub use error::{PokedexError, Result};
pub use repl::Session;
