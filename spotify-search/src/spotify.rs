//! Spotify Web API gateway.
//!
//! Issues `GET {endpoint}?type=artist&q=<query>` and decodes the JSON body.
//! A non-success status is decoded as `{ "error": { "message": ... } }` when
//! possible so the provider's own wording reaches the user.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::gateway::ArtistGateway;
use crate::http::build_client;
use crate::types::{ArtistSearchResponse, ErrorBody};
use reqwest::header;
use url::Url;

/// HTTP gateway for the Spotify search endpoint.
///
/// Holds one [`reqwest::Client`]; cloning the gateway shares its connection pool.
///
/// Timeout and User-Agent are fixed when the gateway is built. Endpoint,
/// token, market and limit are read from the config passed to each
/// [`ArtistGateway::search`] call. Build the gateway from the same config
/// that is later passed to `search`.
#[derive(Debug, Clone)]
pub struct SpotifyGateway {
    client: reqwest::Client,
}

impl SpotifyGateway {
    /// Create a gateway whose client uses the timeout and User-Agent from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: build_client(config)?,
        })
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

/// Build the request URL for an artist search.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the configured endpoint is not a valid URL.
pub fn search_url(query: &str, config: &SearchConfig) -> Result<Url, SearchError> {
    let mut url = Url::parse(&config.endpoint)
        .map_err(|e| SearchError::Config(format!("endpoint is not a valid URL: {e}")))?;

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("type", "artist");
        pairs.append_pair("q", query);

        if let Some(market) = &config.market {
            pairs.append_pair("market", market);
        }

        if let Some(limit) = config.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
    }

    Ok(url)
}

impl ArtistGateway for SpotifyGateway {
    async fn search(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<ArtistSearchResponse, SearchError> {
        let url = search_url(query, config)?;
        tracing::trace!(query, "artist search");
        tracing::debug!(endpoint = %config.endpoint, "sending search request");

        let mut req = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &config.access_token {
            req = req.bearer_auth(token);
        }

        let response = req
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("request failed: {e}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Http(format!("failed to read response body: {e}")))?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "search response");

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message);
            return Err(SearchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body)
            .map_err(|e| SearchError::Parse(format!("invalid search response: {e}")))
    }
}
