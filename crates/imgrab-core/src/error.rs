//! Error taxonomy shared by the classifier and the downloader.

use std::path::PathBuf;

use crate::fetch::FetchError;

/// Fatal errors: any of these aborts the invocation before downloads start.
#[derive(Debug, thiserror::Error)]
pub enum ImgrabError {
    /// URL host or path does not match a known image/album shape.
    #[error("invalid source: {0}")]
    InvalidSource(String),

    /// Album listing was fetched but its format was not understood.
    #[error("could not parse album listing: {0}")]
    Parse(String),

    /// Destination directory does not exist (or is not a directory).
    #[error("destination directory does not exist: {}", .0.display())]
    InvalidDestination(PathBuf),

    /// Album listing could not be fetched.
    #[error("album listing request failed: {0}")]
    Fetch(#[from] FetchError),
}
