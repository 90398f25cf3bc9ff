//! Closest-without-under image selection.
//!
//! Picks the image whose dominant side is the smallest one still at least
//! `target_side`, scanning in provider order (largest first).
//!
//! Selection rule, applied in order:
//!
//! ```text
//! diff = max(width, height) - target_side
//! keep the first image as the tentative pick
//! replace it when diff >= 0 and (best_diff < 0 or diff < best_diff)
//! ```
//!
//! An undersized image is only ever the answer when no image reaches
//! `target_side`, and then it is the first image in the list, not the
//! largest one.

use crate::types::Image;

/// Select the best-fitting image for `target_side`.
///
/// Artists without images get a placeholder of `target_side` x `target_side`
/// pointing at `placeholder_url`.
pub fn closest_image(images: &[Image], target_side: u32, placeholder_url: &str) -> Image {
    let mut best: Option<(&Image, i64)> = None;

    for image in images {
        let diff = i64::from(image.dominant_side()) - i64::from(target_side);

        let replace = match best {
            None => true,
            Some((_, best_diff)) => diff >= 0 && (best_diff < 0 || diff < best_diff),
        };

        if replace {
            best = Some((image, diff));
        }
    }

    match best {
        Some((image, _)) => image.clone(),
        None => Image::new(target_side, target_side, placeholder_url),
    }
}
