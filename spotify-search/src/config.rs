//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls which endpoint is queried, the transport timeout,
//! and how results are projected for display. Every field has a default, so
//! a partially filled TOML table deserializes cleanly.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};

/// The provider's artist search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.spotify.com/v1/search";

/// Desired minimum dominant side, in pixels, for the chosen artist image.
pub const DEFAULT_TARGET_SIDE: u32 = 200;

/// Image reference used for artists that have no images at all.
pub const DEFAULT_PLACEHOLDER_URL: &str = "default-image.png";

/// Largest page size the provider accepts for a single search.
const MAX_LIMIT: u32 = 50;

/// Configuration for an artist search.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Full URL of the search endpoint. Overridable for tests and proxies.
    pub endpoint: String,
    /// Target side used by image selection.
    pub target_side: u32,
    /// Image URL assigned to artists without images.
    pub placeholder_url: String,
    /// HTTP request timeout in seconds. No retries are made on expiry.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, the crate name and version are sent.
    pub user_agent: Option<String>,
    /// Static bearer token sent as `Authorization: Bearer <token>`.
    /// The crate never acquires or refreshes tokens.
    pub access_token: Option<String>,
    /// Optional `market` query parameter (ISO 3166-1 alpha-2 country code).
    pub market: Option<String>,
    /// Optional `limit` query parameter. Only the first page is ever fetched.
    pub limit: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            target_side: DEFAULT_TARGET_SIDE,
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_owned(),
            timeout_seconds: 10,
            user_agent: None,
            access_token: None,
            market: None,
            limit: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `endpoint` must be an absolute `http` or `https` URL
    /// - `target_side` must be greater than 0
    /// - `placeholder_url` must not be empty
    /// - `timeout_seconds` must be greater than 0
    /// - `limit`, when set, must be within `1..=50`
    pub fn validate(&self) -> Result<(), SearchError> {
        let endpoint = url::Url::parse(&self.endpoint)
            .map_err(|e| SearchError::Config(format!("endpoint is not a valid URL: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SearchError::Config(
                "endpoint must use http or https".into(),
            ));
        }
        if self.target_side == 0 {
            return Err(SearchError::Config(
                "target_side must be greater than 0".into(),
            ));
        }
        if self.placeholder_url.trim().is_empty() {
            return Err(SearchError::Config(
                "placeholder_url must not be empty".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_LIMIT {
                return Err(SearchError::Config(format!(
                    "limit must be between 1 and {MAX_LIMIT}"
                )));
            }
        }
        Ok(())
    }
}
