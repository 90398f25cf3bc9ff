//! Case-insensitive ordering of display artists by name.

use crate::types::DisplayArtist;

/// Sort artists by name, comparing the uppercased names.
///
/// The sort is stable: artists whose names are equal ignoring case keep
/// their provider order.
pub fn sort_alpha(items: &mut [DisplayArtist]) {
    items.sort_by_cached_key(|artist| artist.name.to_uppercase());
}
