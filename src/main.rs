//! Pokedex - A command-line Pokedex backed by PokeAPI
//!
//! Starts an interactive prompt on stdin/stdout.

use anyhow::Context;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{repl, Config, PokeApi, Session};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the API client and its response cache
/// 4. Run the prompt loop until `exit` or end of input
/// 5. Stop the cache reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so logs stay out of the way of the prompt,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_ttl={}s, sweep_interval={:?}, strict_reads={}",
        config.base_url, config.cache_ttl, config.sweep_interval, config.strict_reads
    );

    let api = PokeApi::from_config(&config).context("Failed to create PokeAPI client")?;
    let mut session = Session::new(api, config.catch_difficulty);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let outcome = repl::run(&mut session, stdin, &mut stdout).await;

    let api = session.into_api();
    let stats = api.cache().stats().await;
    info!(
        hits = stats.hits,
        misses = stats.misses,
        expired = stats.expired,
        hit_rate = stats.hit_rate(),
        "Cache statistics at exit"
    );
    api.shutdown().await;

    outcome.context("REPL terminated with an I/O error")
}
