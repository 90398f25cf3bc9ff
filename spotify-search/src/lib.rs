//! # spotify-search
//!
//! Artist search against the Spotify Web API, projected into a
//! display-ready list.
//!
//! ## Design
//!
//! - One `GET /v1/search?type=artist&q=...` per search, through the
//!   [`ArtistGateway`] trait ([`SpotifyGateway`] is the HTTP implementation)
//! - The response is projected by [`projector::project`]: one image per
//!   artist (closest to a target side without going under) and a
//!   case-insensitive name ordering
//! - No retries, no caching, no pagination, no token refresh
//!
//! ## Security
//!
//! - Search queries are logged only at trace level
//! - User-facing failure text is either the provider's own message or a
//!   fixed fallback, never transport internals

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod projector;
pub mod spotify;
pub mod types;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use gateway::ArtistGateway;
pub use spotify::SpotifyGateway;
pub use types::{ArtistSearchResponse, DisplayArtist, Image, RawArtist};

/// Search for artists and return the display list.
///
/// Validates `config`, performs a single request through `gateway`, and
/// projects the response. The query is passed through as given; callers
/// are expected to trim it and skip empty input.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration, or
/// whatever the gateway reports for the request itself.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> spotify_search::Result<()> {
/// use spotify_search::{SearchConfig, SpotifyGateway};
///
/// let config = SearchConfig::default();
/// let gateway = SpotifyGateway::new(&config)?;
/// let artists = spotify_search::search_artists(&gateway, "Radiohead", &config).await?;
/// for artist in &artists {
///     println!("{}: {}", artist.name, artist.image.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_artists<G>(
    gateway: &G,
    query: &str,
    config: &SearchConfig,
) -> Result<Vec<DisplayArtist>>
where
    G: ArtistGateway,
{
    config.validate()?;
    let response = gateway.search(query, config).await?;
    Ok(projector::project(&response, config))
}

/// Search for artists with a fresh [`SpotifyGateway`] and default configuration.
///
/// # Errors
///
/// Same as [`search_artists`].
pub async fn search_artists_default(query: &str) -> Result<Vec<DisplayArtist>> {
    let config = SearchConfig::default();
    let gateway = SpotifyGateway::new(&config)?;
    search_artists(&gateway, query, &config).await
}
