//! Album listing parsing.
//!
//! Two shapes are understood: the JSON album document (`data.images[]`) and an
//! HTML page embedding the same image records as inline script data.

use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::ImgrabError;

/// `{"hash":"…", … "ext":".…"}` within a single JSON object literal.
static EMBEDDED_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{"hash":"([A-Za-z0-9]+)"[^{}]*?"ext":"(\.[A-Za-z0-9]+)""#)
        .expect("embedded image pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListingEntry {
    pub hash: String,
    /// Extension as listed, with its leading dot.
    pub ext: Option<String>,
}

#[derive(Deserialize)]
struct AlbumDocument {
    data: AlbumData,
}

#[derive(Deserialize)]
struct AlbumData {
    images: Vec<AlbumImage>,
}

#[derive(Deserialize)]
struct AlbumImage {
    hash: String,
    #[serde(default)]
    ext: Option<String>,
}

/// Parses an album listing into image entries in display order.
///
/// Repeated hashes keep their first position and the album's own hash is
/// skipped. A listing yielding no images is an error, not an empty album.
pub(crate) fn parse_listing(body: &[u8], album_hash: &str) -> Result<Vec<ListingEntry>, ImgrabError> {
    let raw = match serde_json::from_slice::<AlbumDocument>(body) {
        Ok(doc) => doc
            .data
            .images
            .into_iter()
            .map(|img| ListingEntry {
                hash: img.hash,
                ext: img.ext,
            })
            .collect(),
        Err(_) => parse_embedded(&String::from_utf8_lossy(body)),
    };

    let mut seen = HashSet::new();
    let entries: Vec<ListingEntry> = raw
        .into_iter()
        .filter(|e| e.hash != album_hash && !e.hash.is_empty())
        .filter(|e| seen.insert(e.hash.clone()))
        .collect();

    if entries.is_empty() {
        return Err(ImgrabError::Parse(format!(
            "no images found in listing for album {album_hash}"
        )));
    }
    Ok(entries)
}

fn parse_embedded(page: &str) -> Vec<ListingEntry> {
    EMBEDDED_IMAGE
        .captures_iter(page)
        .map(|caps| ListingEntry {
            hash: caps[1].to_string(),
            ext: Some(caps[2].to_string()),
        })
        .collect()
}
