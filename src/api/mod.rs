/// Remote API module
///
/// This module handles:
/// - Fetching pages of image metadata from the picsum listing endpoint
/// - Downloading and resizing tile thumbnails

pub mod listing;
pub mod thumbs;
