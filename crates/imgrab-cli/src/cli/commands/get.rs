//! `imgrab get <url>` – classify, enumerate and download.

use anyhow::{Context, Result};
use imgrab_core::classifier::Classifier;
use imgrab_core::config::ImgrabConfig;
use imgrab_core::downloader::Downloader;
use imgrab_core::fetch::{CurlFetcher, FetchOptions};
use std::path::Path;

pub fn run_get(
    cfg: &ImgrabConfig,
    url: &str,
    dest: &Path,
    verbose: bool,
    keep_names: bool,
) -> Result<()> {
    let classifier = Classifier::new(url)?.default_extension(&cfg.default_extension);
    let fetcher = CurlFetcher::new(FetchOptions::from(cfg));

    let images = classifier
        .prepare_images(&fetcher, cfg.numerate_albums && !keep_names)
        .with_context(|| format!("could not enumerate {url}"))?;
    tracing::info!(url, kind = ?classifier.kind(), count = images.len(), "queued images");

    let mut downloader = Downloader::new(images, dest, verbose)?.with_delay(cfg.delay());
    let summary = downloader.download(&fetcher);
    if summary.failed > 0 {
        tracing::warn!(
            failed = summary.failed,
            total = summary.total,
            "some images could not be downloaded"
        );
    }
    Ok(())
}
