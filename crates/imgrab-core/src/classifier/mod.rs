//! Source URL classification and enumeration into download targets.
//!
//! A [`Classifier`] validates an input URL against the service's hosts, decides
//! whether it names a single image, an album or a gallery, and turns it into an
//! ordered list of [`ImageRef`]s. Album listings are fetched through the
//! [`Fetch`] collaborator and parsed from either of their known formats.

mod listing;
mod numerate;

pub use numerate::numerate_images;

use url::Url;

use crate::error::ImgrabError;
use crate::fetch::Fetch;
use crate::url_model::{
    classify_host, is_recognized_extension, split_extension, HostKind, ImageRef,
    DEFAULT_EXTENSION,
};

/// Path prefixes that are never image hashes on their own.
const RESERVED_SEGMENTS: [&str; 2] = ["a", "gallery"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Image,
    Album,
    /// Album exposed under `/gallery/`; downloads exactly like [`SourceKind::Album`].
    Gallery,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    source: String,
    kind: SourceKind,
    hash: String,
    extension: Option<String>,
    default_extension: String,
}

impl Classifier {
    /// Parses and classifies `url`.
    ///
    /// Fails with [`ImgrabError::InvalidSource`] unless the host is one of the
    /// service hosts (exact match) and the path is `/{hash}[.ext]`,
    /// `/a/{hash}` or `/gallery/{hash}`. The image host only serves the first form.
    pub fn new(url: &str) -> Result<Self, ImgrabError> {
        let invalid = |why: &str| ImgrabError::InvalidSource(format!("{url}: {why}"));

        let parsed = Url::parse(url.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("unsupported scheme"));
        }
        let host = parsed.host_str().ok_or_else(|| invalid("missing host"))?;
        let host_kind = classify_host(host).ok_or_else(|| invalid("not an imgur host"))?;

        let segments: Vec<&str> = parsed
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        let (kind, hash, extension) = match (host_kind, segments.as_slice()) {
            (HostKind::Page, ["a", hash]) => (SourceKind::Album, *hash, None),
            (HostKind::Page, ["gallery", hash]) => (SourceKind::Gallery, *hash, None),
            (_, [single]) if !RESERVED_SEGMENTS.contains(single) => {
                let (stem, ext) = split_extension(single);
                if let Some(ext) = ext {
                    if !is_recognized_extension(ext) {
                        return Err(invalid("unrecognized image extension"));
                    }
                }
                (SourceKind::Image, stem, ext.map(str::to_ascii_lowercase))
            }
            _ => return Err(invalid("unrecognized path")),
        };

        if !is_valid_hash(hash) {
            return Err(invalid("malformed image or album id"));
        }

        tracing::debug!(url, ?kind, hash, "classified source");

        Ok(Self {
            source: url.to_string(),
            kind,
            hash: hash.to_string(),
            extension,
            default_extension: DEFAULT_EXTENSION.to_string(),
        })
    }

    /// Overrides the extension used when no recognized one is available.
    pub fn default_extension(mut self, ext: &str) -> Self {
        let ext = ext.trim().trim_start_matches('.');
        if !ext.is_empty() {
            self.default_extension = ext.to_ascii_lowercase();
        }
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// Image or album identifier taken from the path.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn is_image(&self) -> bool {
        self.kind == SourceKind::Image
    }

    /// True for both albums and galleries.
    pub fn is_album(&self) -> bool {
        matches!(self.kind, SourceKind::Album | SourceKind::Gallery)
    }

    /// Page listing every image of the album, in display order.
    pub fn listing_url(&self) -> String {
        format!("https://imgur.com/a/{}/layout/blog", self.hash)
    }

    /// Enumerates the images behind the source, in display order.
    ///
    /// Single images need no network access. Albums fetch and parse their
    /// listing; a listing that cannot be understood is [`ImgrabError::Parse`].
    pub fn images(&self, fetcher: &dyn Fetch) -> Result<Vec<ImageRef>, ImgrabError> {
        if self.is_image() {
            let ext = self.extension.as_deref().unwrap_or(self.default_extension.as_str());
            return Ok(vec![ImageRef::for_hash(&self.hash, ext)]);
        }

        let listing_url = self.listing_url();
        tracing::debug!(album = %self.hash, %listing_url, "fetching album listing");
        let body = fetcher.fetch(&listing_url)?;
        let entries = listing::parse_listing(&body, &self.hash)?;
        tracing::debug!(album = %self.hash, count = entries.len(), "parsed album listing");

        Ok(entries
            .iter()
            .map(|entry| {
                let ext = entry
                    .ext
                    .as_deref()
                    .map(|e| e.trim_start_matches('.'))
                    .filter(|e| is_recognized_extension(e))
                    .unwrap_or(self.default_extension.as_str());
                ImageRef::for_hash(&entry.hash, ext)
            })
            .collect())
    }

    /// [`images`](Self::images), then numerates album items when `numerate` is set.
    pub fn prepare_images(
        &self,
        fetcher: &dyn Fetch,
        numerate: bool,
    ) -> Result<Vec<ImageRef>, ImgrabError> {
        let mut images = self.images(fetcher)?;
        if numerate && self.is_album() {
            numerate_images(&mut images);
        }
        Ok(images)
    }
}

fn is_valid_hash(hash: &str) -> bool {
    !hash.is_empty() && hash.bytes().all(|b| b.is_ascii_alphanumeric())
}
