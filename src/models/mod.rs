//! Domain models and PokeAPI response bodies
//!
//! `responses` mirrors the wire format; `pokemon` holds the flattened types
//! the REPL works with.

pub mod pokemon;
pub mod responses;

// Re-export commonly used types
pub use pokemon::{Area, Pagination, Pokemon, PokemonShortInfo, PokemonStat};
pub use responses::{AreaDetailsResponse, AreaResponse, PokemonDetailsResponse};
