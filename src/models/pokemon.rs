//! Domain models shown by the REPL
//!
//! Flattened views of PokeAPI resources, independent of the wire format.

use serde::{Deserialize, Serialize};

/// A named location area in the Pokemon world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    pub url: String,
}

/// Cursor URLs for paging through location areas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// A Pokemon reference as listed in an area's encounters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonShortInfo {
    pub name: String,
    pub url: String,
}

/// A single base stat, e.g. `hp: 35`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: String,
    pub base_stat: u32,
}

/// Full Pokemon details used for catching and inspecting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Base experience; higher values are harder to catch
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<String>,
}
