//! Plain-text rendering of a [`SearchState`].
//!
//! Layout:
//!
//! ```text
//! Search Results
//! * Radiohead
//!   image: https://i.scdn.co/image/... (320x320)
//!   link:  https://open.spotify.com/artist/...
//! ```
//!
//! An empty list renders as `No results...`. A failure message follows the
//! list on its own line.

use crate::controller::SearchState;
use spotify_search::{DisplayArtist, Image};
use std::fmt::Write;

const HEADING: &str = "Search Results";
const NO_RESULTS: &str = "No results...";

/// Render the whole view for `state`.
pub fn render(state: &SearchState) -> String {
    let mut out = String::new();
    out.push_str(HEADING);
    out.push('\n');

    let artists = state.artists();
    if artists.is_empty() {
        out.push_str(NO_RESULTS);
        out.push('\n');
    } else {
        for artist in artists {
            render_artist(&mut out, artist);
        }
    }

    if let Some(message) = state.error().filter(|m| !m.is_empty()) {
        out.push_str(message);
        out.push('\n');
    }

    out
}

fn render_artist(out: &mut String, artist: &DisplayArtist) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "* {}", artist.name);
    let _ = writeln!(
        out,
        "  image: {} ({})",
        artist.image.url,
        dimensions(&artist.image)
    );
    if !artist.url.is_empty() {
        let _ = writeln!(out, "  link:  {}", artist.url);
    }
}

fn dimensions(image: &Image) -> String {
    match (image.width, image.height) {
        (Some(w), Some(h)) => format!("{w}x{h}"),
        _ => "unknown size".to_owned(),
    }
}
