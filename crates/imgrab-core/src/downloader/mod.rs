//! Sequential downloader.
//!
//! Drains a queue of [`ImageRef`]s in order, one blocking request at a time,
//! writing each body into the destination directory. A failed item is reported
//! and skipped; it never aborts the run and is never retried. Every item, the
//! last one included, is followed by a fixed pause.

mod progress;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::error::ImgrabError;
use crate::fetch::{Fetch, FetchError};
use crate::url_model::ImageRef;

/// Pause after each item.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// Counts for one [`Downloader::download`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub total: usize,
    pub written: usize,
    pub failed: usize,
}

/// Why a single item was skipped.
#[derive(Debug, thiserror::Error)]
enum ItemError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid filename {0:?}")]
    Filename(String),
    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug)]
pub struct Downloader {
    images: Vec<ImageRef>,
    destination: PathBuf,
    verbose: bool,
    delay: Duration,
}

impl Downloader {
    /// Fails with [`ImgrabError::InvalidDestination`] unless `destination` is an
    /// existing directory. The directory is never created here.
    pub fn new(
        images: Vec<ImageRef>,
        destination: impl AsRef<Path>,
        verbose: bool,
    ) -> Result<Self, ImgrabError> {
        let destination = destination.as_ref();
        if !destination.is_dir() {
            return Err(ImgrabError::InvalidDestination(destination.to_path_buf()));
        }
        Ok(Self {
            images,
            destination: destination.to_path_buf(),
            verbose,
            delay: DEFAULT_DELAY,
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Items still queued.
    pub fn pending(&self) -> &[ImageRef] {
        &self.images
    }

    /// Downloads every queued item, printing progress to stdout when verbose.
    pub fn download(&mut self, fetcher: &dyn Fetch) -> DownloadSummary {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.download_to(fetcher, &mut out)
    }

    /// Like [`download`](Self::download) but writes console lines to `out`.
    ///
    /// The queue is empty afterwards regardless of how many items failed.
    pub fn download_to(&mut self, fetcher: &dyn Fetch, out: &mut dyn Write) -> DownloadSummary {
        let images = std::mem::take(&mut self.images);
        let total = images.len();
        let mut summary = DownloadSummary {
            total,
            ..DownloadSummary::default()
        };
        tracing::info!(total, destination = %self.destination.display(), "download run started");

        for (index, image) in images.into_iter().enumerate() {
            if self.verbose {
                progress::item(out, index + 1, total, image.url());
            }

            match write_image(&self.destination, fetcher, &image) {
                Ok(path) => {
                    summary.written += 1;
                    tracing::debug!(url = image.url(), path = %path.display(), "saved image");
                }
                Err(err) => {
                    summary.failed += 1;
                    tracing::warn!(url = image.url(), error = %err, "could not download image");
                    if self.verbose {
                        progress::failure(out, &err);
                    }
                }
            }

            thread::sleep(self.delay);
        }

        tracing::info!(
            total,
            written = summary.written,
            failed = summary.failed,
            "download run finished"
        );
        summary
    }
}

/// Fetches one image and writes it under `destination`, replacing any existing file.
///
/// Only the final component of the filename is used, so a queued name can never
/// escape the destination directory.
fn write_image(
    destination: &Path,
    fetcher: &dyn Fetch,
    image: &ImageRef,
) -> Result<PathBuf, ItemError> {
    let name = Path::new(image.filename())
        .file_name()
        .ok_or_else(|| ItemError::Filename(image.filename().to_string()))?;
    let body = fetcher.fetch(image.url())?;
    let path = destination.join(name);
    fs::write(&path, body).map_err(|source| ItemError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
