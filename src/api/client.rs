//! PokeAPI client
//!
//! Fetches location areas and Pokemon from PokeAPI, consulting the response
//! cache by request URL before going to the network.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{
    Area, AreaDetailsResponse, AreaResponse, Pagination, Pokemon, PokemonDetailsResponse,
    PokemonShortInfo,
};

const LOCATION_AREAS_PATH: &str = "/location-area";
const POKEMON_DETAILS_PATH: &str = "/pokemon";

/// Cached client for the PokeAPI endpoints the REPL uses.
#[derive(Debug)]
pub struct PokeApi {
    client: Client,
    base_url: String,
    cache: Cache,
}

impl PokeApi {
    /// Creates a client rooted at `base_url` that stores responses in `cache`.
    pub fn new(base_url: impl Into<String>, cache: Cache) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache,
        }
    }

    /// Creates a client and its cache from configuration.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Cache::new(config.cache_config())?;
        Ok(Self::new(config.base_url.clone(), cache))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Fetches one page of location areas.
    ///
    /// `page_url` is a cursor from a previous [`Pagination`]; `None` starts at
    /// the first page.
    pub async fn retrieve_areas(&self, page_url: Option<&str>) -> Result<(Vec<Area>, Pagination)> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!("{}{}", self.base_url, LOCATION_AREAS_PATH),
        };

        let response: AreaResponse = self.fetch(&url).await?;
        Ok(response.into_domain())
    }

    /// Lists the Pokemon that can be encountered in `area`.
    pub async fn retrieve_pokemon_in_area(&self, area: &str) -> Result<Vec<PokemonShortInfo>> {
        let url = format!("{}{}/{}", self.base_url, LOCATION_AREAS_PATH, area);

        let response: AreaDetailsResponse = self.fetch(&url).await?;
        Ok(response.into_domain())
    }

    /// Fetches full details for the Pokemon called `name`.
    pub async fn get_pokemon_details(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}{}/{}", self.base_url, POKEMON_DETAILS_PATH, name);

        let response: PokemonDetailsResponse = self.fetch(&url).await?;
        Ok(response.into_domain())
    }

    /// Stops the cache reaper and waits for it to exit.
    pub async fn shutdown(self) {
        self.cache.shutdown().await;
    }

    /// Decodes the cached body for `url`, or fetches and caches it.
    ///
    /// A cached body that no longer decodes as `T` is ignored and refetched.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(body) = self.cache.get(url).await {
            match serde_json::from_slice(&body) {
                Ok(value) => {
                    debug!(url, "Served from cache");
                    return Ok(value);
                }
                Err(err) => debug!(url, error = %err, "Cached body failed to decode, refetching"),
            }
        }

        debug!(url, "Fetching from network");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body)?;

        // Only bodies that decoded are worth caching
        self.cache.put(url, body).await;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client_with_cache(base_url: &str) -> PokeApi {
        let cache = Cache::with_ttl(Duration::from_secs(60)).unwrap();
        PokeApi::new(base_url, cache)
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_trimmed() {
        let api = client_with_cache("http://localhost:9/api/v2/");
        assert_eq!(api.base_url(), "http://localhost:9/api/v2");
    }

    #[tokio::test]
    async fn test_cached_body_served_without_network() {
        // Port 9 (discard) is never listening; any network access would fail
        let api = client_with_cache("http://127.0.0.1:9/api/v2");
        let body = r#"{"id": 25, "name": "pikachu", "base_experience": 112, "height": 4, "weight": 60}"#;
        api.cache()
            .put("http://127.0.0.1:9/api/v2/pokemon/pikachu", body.as_bytes().to_vec())
            .await;

        let pokemon = api.get_pokemon_details("pikachu").await.unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, 112);
    }

    #[tokio::test]
    async fn test_cached_page_url_used_verbatim() {
        let api = client_with_cache("http://127.0.0.1:9/api/v2");
        let page = "http://127.0.0.1:9/api/v2/location-area?offset=20&limit=20";
        let body = r#"{"count": 2, "next": null, "previous": "prev", "results": [{"name": "a", "url": "u"}]}"#;
        api.cache().put(page, body.as_bytes().to_vec()).await;

        let (areas, pagination) = api.retrieve_areas(Some(page)).await.unwrap();

        assert_eq!(areas[0].name, "a");
        assert_eq!(pagination.previous.as_deref(), Some("prev"));
    }

    #[tokio::test]
    async fn test_undecodable_cache_entry_falls_through_to_network() {
        let api = client_with_cache("http://127.0.0.1:9/api/v2");
        api.cache()
            .put("http://127.0.0.1:9/api/v2/pokemon/pikachu", &b"not json"[..])
            .await;

        let result = api.get_pokemon_details("pikachu").await;

        assert!(matches!(result, Err(PokedexError::Http(_))));
    }
}
