//! Headless host for artist search.
//!
//! Reads one query per line from stdin (or takes queries as arguments),
//! submits each, and writes the rendered view to stdout. With `--json` the
//! current state is written as one JSON object per line instead.
//!
//! All tracing output goes to stderr so that stdout stays a clean view
//! channel.

use artist_search::input::decode_query_line;
use artist_search::{HostConfig, SearchController, SearchState, view};
use clap::Parser;
use spotify_search::SpotifyGateway;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Search the Spotify catalog for artists.
#[derive(Parser)]
#[command(name = "artist-search-host", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print each state as JSON instead of the text view.
    #[arg(long)]
    json: bool,

    /// Queries to run. Reads stdin line by line when none are given.
    queries: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = HostConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("artist-search-host starting");

    let gateway = SpotifyGateway::new(&config.search)?;
    let mut controller = SearchController::new(gateway, config.search)?;

    if cli.queries.is_empty() {
        let mut segments = BufReader::new(tokio::io::stdin()).split(b'\n');
        while let Some(bytes) = segments.next_segment().await? {
            let Some(line) = decode_query_line(bytes) else {
                continue;
            };
            let state = controller.submit(&line).await;
            print_state(state, cli.json)?;
        }
    } else {
        for query in &cli.queries {
            let state = controller.submit(query).await;
            print_state(state, cli.json)?;
        }
    }

    tracing::info!("artist-search-host shut down cleanly");
    Ok(())
}

fn print_state(state: &SearchState, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(state)?);
    } else {
        println!("{}", view::render(state));
    }
    Ok(())
}
