//! Path utilities for detecting convertible files by extension.
//!
//! This module provides functions to check whether a file is a candidate
//! for conversion based on its extension. These are used by the scanner
//! when collecting a batch from the input directory.

use std::path::Path;

/// List of supported source image extensions.
const SOURCE_IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "tif", "tiff", "bmp", "webp",
];

/// Check if a path has a convertible image extension.
///
/// The check is case-insensitive and matches on the final extension only.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use pixelforged_common::paths::is_source_image;
///
/// assert!(is_source_image(Path::new("photo.png")));
/// assert!(is_source_image(Path::new("/path/to/scan.TIFF")));
/// assert!(!is_source_image(Path::new("notes.txt")));
/// ```
pub fn is_source_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Get the list of supported source image extensions.
///
/// # Examples
///
/// ```
/// use pixelforged_common::paths::source_image_extensions;
///
/// let extensions = source_image_extensions();
/// assert!(extensions.contains(&"png"));
/// assert!(extensions.contains(&"webp"));
/// ```
#[must_use]
pub fn source_image_extensions() -> &'static [&'static str] {
    SOURCE_IMAGE_EXTENSIONS
}
