//! Result projection: raw provider response to display list.
//!
//! Pure and synchronous. Each artist gets exactly one image via
//! closest-without-under selection, and the list is ordered by name
//! ignoring case.

pub mod display;
pub mod image;
pub mod ordering;

pub use display::project;
pub use image::closest_image;
pub use ordering::sort_alpha;
