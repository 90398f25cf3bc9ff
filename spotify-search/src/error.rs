//! Error types for the spotify-search crate.
//!
//! All errors use stable string messages suitable for logging. What the user
//! sees is produced by [`SearchError::user_message`], which never exposes
//! anything but the provider's own message or a fixed fallback.

/// Text shown when a failed search carries no provider message.
pub const FALLBACK_MESSAGE: &str = "search failed";

/// Prefix placed in front of every user-facing failure message.
pub const FAILURE_PREFIX: &str = "There was a problem with your search: ";

/// Errors that can occur during an artist search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider answered with a non-success status code.
    #[error("provider returned status {status}: {}", .message.as_deref().unwrap_or(FALLBACK_MESSAGE))]
    Status {
        /// HTTP status code.
        status: u16,
        /// `error.message` from the provider's error body, if it had one.
        message: Option<String>,
    },

    /// A success response whose body was not the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// The provider's human-readable message, when the failure carried one.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }

    /// Message suitable for display, without the failure prefix.
    pub fn user_message(&self) -> &str {
        self.provider_message().unwrap_or(FALLBACK_MESSAGE)
    }

    /// Full message for the error slot of a search view.
    pub fn display_message(&self) -> String {
        format!("{FAILURE_PREFIX}{}", self.user_message())
    }
}

/// Convenience type alias for spotify-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
