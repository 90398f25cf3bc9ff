//! Search state container and the controller that drives it.
//!
//! [`SearchState`] is the single current-outcome slot. It only changes
//! through [`SearchState::apply`]. [`SearchController`] trims queries,
//! skips empty ones, calls the gateway, and discards completions that a
//! newer search has overtaken.
//!
//! In-flight requests are never cancelled; a stale completion is simply
//! dropped when it arrives.

use serde::Serialize;
use spotify_search::gateway::ArtistGateway;
use spotify_search::{DisplayArtist, SearchConfig, SearchError, search_artists};

use crate::error::{HostError, Result};

/// What the view shows. Results and error are never present together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchState {
    /// Nothing searched yet.
    #[default]
    Idle,
    /// A search is in flight.
    Searching {
        /// The trimmed query being searched.
        query: String,
    },
    /// The latest search succeeded, possibly with no matches.
    Success {
        /// Display list, sorted by name.
        artists: Vec<DisplayArtist>,
    },
    /// The latest search failed.
    Failure {
        /// User-facing message, prefix included.
        message: String,
    },
}

/// Input to the state reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A non-empty query was submitted.
    Submitted(String),
    /// The current search produced a display list.
    Succeeded(Vec<DisplayArtist>),
    /// The current search failed with a user-facing message.
    Failed(String),
}

impl SearchState {
    /// Reducer: the state after `event`. Every event fully replaces the
    /// previous outcome.
    #[must_use]
    pub fn apply(self, event: SearchEvent) -> Self {
        match event {
            SearchEvent::Submitted(query) => Self::Searching { query },
            SearchEvent::Succeeded(artists) => Self::Success { artists },
            SearchEvent::Failed(message) => Self::Failure { message },
        }
    }

    /// Artists to list. Empty unless the latest search succeeded.
    pub fn artists(&self) -> &[DisplayArtist] {
        match self {
            Self::Success { artists } => artists,
            _ => &[],
        }
    }

    /// Error message to show, if the latest search failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => Some(message),
            _ => None,
        }
    }

    /// Whether a search is in flight.
    pub fn is_searching(&self) -> bool {
        matches!(self, Self::Searching { .. })
    }
}

/// Handle for one started search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    query: String,
}

impl RequestTicket {
    /// Monotonic request number; higher is newer.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The trimmed query to send.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Result of [`SearchController::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Query was empty after trimming. No request, state untouched.
    Ignored,
    /// A request should be made for this ticket.
    Started(RequestTicket),
}

/// Owns the current [`SearchState`] and the gateway used to fill it.
pub struct SearchController<G> {
    gateway: G,
    config: SearchConfig,
    state: SearchState,
    generation: u64,
}

impl<G: ArtistGateway> SearchController<G> {
    /// Create a controller in the [`SearchState::Idle`] state.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Config`] if `config` is invalid.
    pub fn new(gateway: G, config: SearchConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| HostError::Config(e.to_string()))?;
        Ok(Self {
            gateway,
            config,
            state: SearchState::Idle,
            generation: 0,
        })
    }

    /// The current state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The search configuration in use.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Start a search for `raw_query`.
    ///
    /// Whitespace-only input is ignored entirely: no request is made and the
    /// current results or error stay as they are.
    pub fn begin(&mut self, raw_query: &str) -> Submission {
        let query = raw_query.trim();

        if query.is_empty() {
            tracing::debug!("ignoring empty query");
            return Submission::Ignored;
        }

        self.generation += 1;
        let ticket = RequestTicket {
            generation: self.generation,
            query: query.to_owned(),
        };

        self.transition(SearchEvent::Submitted(ticket.query.clone()));
        Submission::Started(ticket)
    }

    /// Apply the projected outcome of the search identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a newer search
    /// has started since `ticket` was issued.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: std::result::Result<Vec<DisplayArtist>, SearchError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale search completion"
            );
            return false;
        }

        let event = match result {
            Ok(artists) => SearchEvent::Succeeded(artists),
            Err(err) => {
                tracing::warn!(error = %err, "artist search failed");
                SearchEvent::Failed(err.display_message())
            }
        };

        self.transition(event);
        true
    }

    /// Begin, run, and complete one search.
    ///
    /// The request and projection both go through
    /// [`spotify_search::search_artists`] with this controller's config.
    pub async fn submit(&mut self, raw_query: &str) -> &SearchState {
        if let Submission::Started(ticket) = self.begin(raw_query) {
            let result = search_artists(&self.gateway, ticket.query(), &self.config).await;
            self.complete(ticket, result);
        }
        &self.state
    }

    fn transition(&mut self, event: SearchEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }
}
