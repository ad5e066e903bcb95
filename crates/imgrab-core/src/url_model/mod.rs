//! URL modeling: image references, host allow-list, extensions and filenames.

mod extension;
mod host;

pub use extension::{is_recognized_extension, split_extension, DEFAULT_EXTENSION};
pub use host::{classify_host, HostKind, IMAGE_HOST};

/// One unit of work for the downloader: where to fetch, what to call it locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    url: String,
    filename: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            filename: filename.into(),
        }
    }

    /// Builds the direct image URL and filename for an image hash.
    ///
    /// `ext` may carry a leading dot and is lowercased, e.g.
    /// `ImageRef::for_hash("0s7mWKz", "JPG")` →
    /// `https://i.imgur.com/0s7mWKz.jpg` saved as `0s7mWKz.jpg`.
    pub fn for_hash(hash: &str, ext: &str) -> Self {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        let filename = format!("{hash}.{ext}");
        Self {
            url: format!("https://{IMAGE_HOST}/{filename}"),
            filename,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub(crate) fn set_filename(&mut self, filename: String) {
        self.filename = filename;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_hash_builds_direct_url() {
        let image = ImageRef::for_hash("0s7mWKz", "jpg");
        assert_eq!(image.url(), "https://i.imgur.com/0s7mWKz.jpg");
        assert_eq!(image.filename(), "0s7mWKz.jpg");
    }

    #[test]
    fn for_hash_normalizes_extension() {
        let image = ImageRef::for_hash("abc", ".PNG");
        assert_eq!(image.url(), "https://i.imgur.com/abc.png");
        assert_eq!(image.filename(), "abc.png");
    }
}
