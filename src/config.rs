//! Configuration Module
//!
//! Handles loading client and cache configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{PokedexError, Result};

/// Default PokeAPI endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default cache TTL in seconds
pub const DEFAULT_CACHE_TTL_SECS: u64 = 5;

/// Default catch difficulty threshold
pub const DEFAULT_CATCH_DIFFICULTY: u32 = 40;

// == Cache Config ==
/// Parameters for an expiring cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum age of an entry before the reaper removes it
    pub ttl: Duration,
    /// Reaper tick period, `None` = same as `ttl`
    pub sweep_interval: Option<Duration>,
    /// Treat entries older than `ttl` as misses on read
    pub strict_reads: bool,
}

impl CacheConfig {
    /// Creates a config where the TTL also drives the sweep period.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sweep_interval: None,
            strict_reads: false,
        }
    }

    /// Sets a sweep period shorter than the TTL.
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = Some(interval);
        self
    }

    /// Enables read-time age filtering.
    pub fn with_strict_reads(mut self, strict: bool) -> Self {
        self.strict_reads = strict;
        self
    }

    /// Effective reaper tick period.
    pub fn effective_sweep_interval(&self) -> Duration {
        self.sweep_interval.unwrap_or(self.ttl)
    }

    // == Validate ==
    /// Rejects a zero TTL and sweep intervals outside `(0, ttl]`.
    pub fn validate(&self) -> Result<()> {
        if self.ttl.is_zero() {
            return Err(PokedexError::InvalidConfig(
                "cache TTL must be greater than zero".to_string(),
            ));
        }

        if let Some(interval) = self.sweep_interval {
            if interval.is_zero() {
                return Err(PokedexError::InvalidConfig(
                    "sweep interval must be greater than zero".to_string(),
                ));
            }
            if interval > self.ttl {
                return Err(PokedexError::InvalidConfig(format!(
                    "sweep interval {:?} exceeds cache TTL {:?}",
                    interval, self.ttl
                )));
            }
        }

        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

// == Client Config ==
/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// PokeAPI base URL, without trailing slash
    pub base_url: String,
    /// Cache TTL in seconds
    pub cache_ttl: u64,
    /// Reaper interval in seconds, `None` = same as `cache_ttl`
    pub sweep_interval: Option<u64>,
    /// Reject entries older than the TTL on read
    pub strict_reads: bool,
    /// Base-experience roll at or below which a catch succeeds
    pub catch_difficulty: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API endpoint (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL_SECS` - Cache TTL in seconds (default: 5)
    /// - `POKEDEX_SWEEP_INTERVAL_SECS` - Reaper interval in seconds (default: TTL)
    /// - `POKEDEX_STRICT_READS` - `true`/`1` to filter stale reads (default: false)
    /// - `POKEDEX_CATCH_DIFFICULTY` - Catch threshold (default: 40)
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parsed = |name: &str| lookup(name).and_then(|v| parse_value(&v));

        Self {
            base_url: lookup("POKEAPI_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache_ttl: parsed("POKEDEX_CACHE_TTL_SECS").unwrap_or(DEFAULT_CACHE_TTL_SECS),
            sweep_interval: parsed("POKEDEX_SWEEP_INTERVAL_SECS"),
            strict_reads: lookup("POKEDEX_STRICT_READS")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            catch_difficulty: lookup("POKEDEX_CATCH_DIFFICULTY")
                .and_then(|v| parse_value(&v))
                .unwrap_or(DEFAULT_CATCH_DIFFICULTY),
        }
    }

    /// Derives the cache parameters from this config.
    pub fn cache_config(&self) -> CacheConfig {
        let mut cache = CacheConfig::new(Duration::from_secs(self.cache_ttl))
            .with_strict_reads(self.strict_reads);
        if let Some(secs) = self.sweep_interval {
            cache = cache.with_sweep_interval(Duration::from_secs(secs));
        }
        cache
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL_SECS,
            sweep_interval: None,
            strict_reads: false,
            catch_difficulty: DEFAULT_CATCH_DIFFICULTY,
        }
    }
}

fn parse_value<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}
