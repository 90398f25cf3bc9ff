//! Wire types for the provider's search API and the display model built from them.

use serde::{Deserialize, Serialize};

/// An image descriptor as the provider reports it.
///
/// Width and height may be null in provider data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Width in pixels.
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels.
    #[serde(default)]
    pub height: Option<u32>,
    /// Source URL of the image.
    pub url: String,
}

impl Image {
    /// Construct an image with known dimensions.
    pub fn new(width: u32, height: u32, url: impl Into<String>) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            url: url.into(),
        }
    }

    /// The larger of width and height. Unknown dimensions count as 0.
    pub fn dominant_side(&self) -> u32 {
        self.width.unwrap_or(0).max(self.height.unwrap_or(0))
    }
}

/// External profile links of an artist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUrls {
    /// Link to the artist's page on the provider.
    #[serde(default)]
    pub spotify: Option<String>,
}

/// An artist item from the search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArtist {
    /// Provider identifier.
    pub id: String,
    /// Artist name.
    pub name: String,
    /// Profile links.
    #[serde(default)]
    pub external_urls: ExternalUrls,
    /// Images, ordered by the provider from largest to smallest.
    #[serde(default)]
    pub images: Vec<Image>,
}

/// The `artists` page of a search response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistPage {
    /// Matching artists in provider order.
    #[serde(default)]
    pub items: Vec<RawArtist>,
    /// Total number of matches known to the provider.
    #[serde(default)]
    pub total: Option<u32>,
}

/// Body of a successful `type=artist` search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSearchResponse {
    /// The artist results page.
    pub artists: ArtistPage,
}

/// Body of a failed request: `{ "error": { "status": 400, "message": "..." } }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Error details, when present.
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

/// The `error` object of a failed request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    /// Status code echoed by the provider.
    #[serde(default)]
    pub status: Option<u16>,
    /// Human-readable description.
    #[serde(default)]
    pub message: Option<String>,
}

/// A display-ready artist: one chosen image per artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayArtist {
    /// Provider identifier.
    pub id: String,
    /// Artist name.
    pub name: String,
    /// Profile URL, empty when the provider gave none.
    pub url: String,
    /// The image selected for display.
    pub image: Image,
}
