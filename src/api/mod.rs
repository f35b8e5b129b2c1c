//! API Module
//!
//! HTTP client for the PokeAPI resources the REPL needs.
//!
//! # Endpoints
//! - `GET /location-area` - Paged list of location areas
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::PokeApi;
