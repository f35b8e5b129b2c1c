//! PokeAPI response DTOs
//!
//! Defines the subset of each PokeAPI response body the client reads, and the
//! mapping into domain models.

use serde::{Deserialize, Serialize};

use super::pokemon::{Area, Pagination, Pokemon, PokemonShortInfo, PokemonStat};

/// `{ "name": ..., "url": ... }` reference used throughout PokeAPI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Response body for `GET /location-area`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaResponse {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl AreaResponse {
    /// Splits the page into its areas and cursor.
    pub fn into_domain(self) -> (Vec<Area>, Pagination) {
        let areas = self
            .results
            .into_iter()
            .map(|r| Area {
                name: r.name,
                url: r.url,
            })
            .collect();

        let pagination = Pagination {
            next: self.next,
            previous: self.previous,
        };

        (areas, pagination)
    }
}

/// One entry of `pokemon_encounters`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Response body for `GET /location-area/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaDetailsResponse {
    #[serde(default)]
    pub name: String,
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl AreaDetailsResponse {
    pub fn into_domain(self) -> Vec<PokemonShortInfo> {
        self.pokemon_encounters
            .into_iter()
            .map(|e| PokemonShortInfo {
                name: e.pokemon.name,
                url: e.pokemon.url,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Response body for `GET /pokemon/{name}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonDetailsResponse {
    pub id: u32,
    pub name: String,
    /// Null for some alternate forms
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

impl PokemonDetailsResponse {
    pub fn into_domain(self) -> Pokemon {
        Pokemon {
            id: self.id,
            name: self.name,
            base_experience: self.base_experience.unwrap_or(0),
            height: self.height,
            weight: self.weight,
            stats: self
                .stats
                .into_iter()
                .map(|s| PokemonStat {
                    name: s.stat.name,
                    base_stat: s.base_stat,
                })
                .collect(),
            types: self.types.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_response_into_domain() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;
        let resp: AreaResponse = serde_json::from_str(json).unwrap();
        let (areas, pagination) = resp.into_domain();

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].name, "canalave-city-area");
        assert!(pagination.next.unwrap().contains("offset=20"));
        assert!(pagination.previous.is_none());
    }

    #[test]
    fn test_area_details_into_domain() {
        let json = r#"{
            "name": "pastoria-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}, "version_details": []},
                {"pokemon": {"name": "magikarp", "url": "https://pokeapi.co/api/v2/pokemon/129/"}, "version_details": []}
            ]
        }"#;
        let resp: AreaDetailsResponse = serde_json::from_str(json).unwrap();
        let names: Vec<String> = resp.into_domain().into_iter().map(|p| p.name).collect();

        assert_eq!(names, vec!["tentacool", "magikarp"]);
    }

    #[test]
    fn test_pokemon_details_into_domain() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "u"}},
                {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": "u"}}
            ],
            "types": [{"slot": 1, "type": {"name": "electric", "url": "u"}}]
        }"#;
        let resp: PokemonDetailsResponse = serde_json::from_str(json).unwrap();
        let pokemon = resp.into_domain();

        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.base_experience, 112);
        assert_eq!(pokemon.stats[1].name, "attack");
        assert_eq!(pokemon.stats[1].base_stat, 55);
        assert_eq!(pokemon.types, vec!["electric"]);
    }

    #[test]
    fn test_null_base_experience_defaults_to_zero() {
        let json = r#"{"id": 10001, "name": "deoxys-attack", "base_experience": null, "height": 17, "weight": 608}"#;
        let resp: PokemonDetailsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.into_domain().base_experience, 0);
    }
}
