//! Artist search host.
//!
//! Accepts text queries, searches the Spotify catalog for matching artists,
//! and renders the result list or the error for the latest search.
//!
//! # Architecture
//!
//! - **Gateway and projection** live in the `spotify-search` crate
//! - **Controller**: owns the single current-outcome slot and applies
//!   search events through a reducer ([`controller`])
//! - **View**: renders the current state as text ([`view`])
//! - **Host binary**: reads one query per line from stdin and prints the view;
//!   lines that are not valid UTF-8 are skipped ([`input`])

pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod view;

pub use config::HostConfig;
pub use controller::{RequestTicket, SearchController, SearchEvent, SearchState, Submission};
pub use error::{HostError, Result};
