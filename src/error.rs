//! Error types for the artist search host.

use spotify_search::SearchError;

/// Top-level error type for the host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Configuration file could not be parsed or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Search layer error outside of a single search attempt
    /// (for example, building the HTTP client).
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, HostError>;
