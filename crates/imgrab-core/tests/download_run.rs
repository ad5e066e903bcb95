//! Integration test: sequential download run against a local HTTP server.
//!
//! Mixes successful items, HTTP error statuses and a refused connection, and
//! checks that the run drains the whole queue, writes only the successful
//! items and leaves the working directory alone.

mod common;

use imgrab_core::downloader::{DownloadSummary, Downloader};
use imgrab_core::fetch::CurlFetcher;
use imgrab_core::url_model::ImageRef;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn mixed_queue_writes_successes_and_skips_failures() {
    let base = common::image_server::start(common::image_server::routes(&[
        ("/one.jpg", 200, &b"first image"[..]),
        ("/two.png", 200, &b"second image"[..]),
        ("/boom.jpg", 500, &b"server error"[..]),
    ]));

    let queue = vec![
        ImageRef::new(format!("{base}one.jpg"), "1.jpg"),
        ImageRef::new(format!("{base}gone.jpg"), "2.jpg"),
        ImageRef::new(format!("{base}boom.jpg"), "3.jpg"),
        ImageRef::new("http://127.0.0.1:1/refused.jpg", "4.jpg"),
        ImageRef::new(format!("{base}two.png"), "5.png"),
    ];

    let dest = tempdir().unwrap();
    let cwd_before = std::env::current_dir().unwrap();

    let mut downloader = Downloader::new(queue, dest.path(), true)
        .unwrap()
        .with_delay(Duration::ZERO);
    let mut out = Vec::new();
    let summary = downloader.download_to(&CurlFetcher::default(), &mut out);

    assert_eq!(
        summary,
        DownloadSummary {
            total: 5,
            written: 2,
            failed: 3
        }
    );
    assert_eq!(std::env::current_dir().unwrap(), cwd_before);
    assert!(downloader.pending().is_empty());

    assert_eq!(std::fs::read(dest.path().join("1.jpg")).unwrap(), &b"first image"[..]);
    assert_eq!(std::fs::read(dest.path().join("5.png")).unwrap(), &b"second image"[..]);
    for missing in ["2.jpg", "3.jpg", "4.jpg"] {
        assert!(!dest.path().join(missing).exists(), "{missing} must not be written");
    }

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8, "{text}");
    assert_eq!(lines[0], format!("Progress: 1/5. Downloading: {base}one.jpg"));
    assert_eq!(lines[2], "Could not download, error status: 404");
    assert_eq!(lines[4], "Could not download, error status: 500");
    assert_eq!(lines[5], "Progress: 4/5. Downloading: http://127.0.0.1:1/refused.jpg");
    assert!(lines[6].starts_with("Something went wrong: "), "{}", lines[6]);
    assert_eq!(lines[7], format!("Progress: 5/5. Downloading: {base}two.png"));
}

#[test]
fn missing_destination_fails_before_any_request() {
    let dest = tempdir().unwrap();
    let missing = dest.path().join("does-not-exist");
    let queue = vec![ImageRef::new("http://127.0.0.1:1/x.jpg", "x.jpg")];
    assert!(Downloader::new(queue, &missing, false).is_err());
    assert!(!missing.exists());
}
