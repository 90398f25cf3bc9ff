//! Raw search response to display list.

use crate::config::SearchConfig;
use crate::types::{ArtistSearchResponse, DisplayArtist, RawArtist};

use super::image::closest_image;
use super::ordering::sort_alpha;

/// Project a search response into display-ready artists.
///
/// # Pipeline
///
/// 1. Extract id, name and profile URL from each artist item
/// 2. Select one image per artist with [`closest_image`], using
///    `config.target_side` and `config.placeholder_url`
/// 3. Sort by name ignoring case with [`sort_alpha`]
///
/// A response with no items projects to an empty list.
pub fn project(response: &ArtistSearchResponse, config: &SearchConfig) -> Vec<DisplayArtist> {
    let mut artists: Vec<DisplayArtist> = response
        .artists
        .items
        .iter()
        .map(|artist| project_artist(artist, config))
        .collect();

    sort_alpha(&mut artists);

    tracing::debug!(count = artists.len(), "projected artists");
    artists
}

fn project_artist(artist: &RawArtist, config: &SearchConfig) -> DisplayArtist {
    DisplayArtist {
        id: artist.id.clone(),
        name: artist.name.clone(),
        url: artist.external_urls.spotify.clone().unwrap_or_default(),
        image: closest_image(&artist.images, config.target_side, &config.placeholder_url),
    }
}
