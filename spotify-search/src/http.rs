//! Shared HTTP client for provider requests.
//!
//! Provides a configured [`reqwest::Client`] with the configured timeout and
//! User-Agent. Redirects follow reqwest's default policy.

use crate::config::SearchConfig;
use crate::error::SearchError;
use std::time::Duration;

/// User-Agent sent when the configuration does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for provider requests.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .as_deref()
        .unwrap_or(DEFAULT_USER_AGENT);

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}
