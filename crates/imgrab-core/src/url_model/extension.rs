//! Image file extensions.

/// Extension appended when a link carries none.
pub const DEFAULT_EXTENSION: &str = "jpg";

const RECOGNIZED: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "apng", "bmp", "tif", "tiff", "webp",
];

pub fn is_recognized_extension(ext: &str) -> bool {
    RECOGNIZED.iter().any(|r| ext.eq_ignore_ascii_case(r))
}

/// Splits a path segment into `(stem, Some(ext))` at the last dot.
///
/// A leading or trailing dot does not count as an extension separator.
pub fn split_extension(segment: &str) -> (&str, Option<&str>) {
    match segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => (stem, Some(ext)),
        _ => (segment, None),
    }
}
