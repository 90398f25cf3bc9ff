//! Trait definition for the search gateway.
//!
//! A gateway issues exactly one outbound request per search and turns the
//! result into either a decoded [`ArtistSearchResponse`] or a
//! [`SearchError`]. [`crate::spotify::SpotifyGateway`] is the HTTP
//! implementation; tests substitute their own.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::ArtistSearchResponse;

/// A backend that answers artist search queries.
///
/// Implementations must not retry, must not validate the query (callers
/// filter empty input), and must not cancel earlier calls when a new one
/// starts. All implementations must be `Send + Sync` so the host can share
/// them across tasks.
pub trait ArtistGateway: Send + Sync {
    /// Perform one artist search and return the decoded provider response.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails, the provider answers
    /// with a non-success status, or the body cannot be decoded.
    fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<ArtistSearchResponse, SearchError>> + Send;
}
