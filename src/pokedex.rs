//! Pokedex Module
//!
//! Holds the Pokemon caught during a session.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Pokemon;

/// A caught Pokemon and when it was caught.
#[derive(Debug, Clone, Serialize)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Caught Pokemon keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: HashMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch; catching the same Pokemon again replaces the record.
    pub fn add(&mut self, pokemon: Pokemon) {
        let entry = CaughtPokemon {
            caught_at: Utc::now(),
            pokemon,
        };
        self.caught.insert(entry.pokemon.name.clone(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.caught.get(name)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }

    /// Names of all caught Pokemon in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.caught.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
