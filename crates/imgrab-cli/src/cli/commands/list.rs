//! `imgrab list <url>` – show what `get` would download.

use anyhow::Result;
use imgrab_core::classifier::Classifier;
use imgrab_core::config::ImgrabConfig;
use imgrab_core::fetch::{CurlFetcher, FetchOptions};

pub fn run_list(cfg: &ImgrabConfig, url: &str, keep_names: bool) -> Result<()> {
    let classifier = Classifier::new(url)?.default_extension(&cfg.default_extension);
    let fetcher = CurlFetcher::new(FetchOptions::from(cfg));
    let images = classifier.prepare_images(&fetcher, cfg.numerate_albums && !keep_names)?;
    for image in &images {
        println!("{}  {}", image.filename(), image.url());
    }
    Ok(())
}
