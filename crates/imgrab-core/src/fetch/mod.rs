//! HTTP fetch collaborator.
//!
//! The classifier (album listings) and the downloader (image bodies) only see
//! the [`Fetch`] trait, so tests can swap the network for canned responses.

mod client;

pub use client::{CurlFetcher, FetchOptions};

/// Per-request failure. Never fatal for a download run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Network, DNS, TLS or timeout failure before a usable response arrived.
    #[error("{reason}")]
    Transport { reason: String },
    /// Server answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
}

/// Fetch the full body of a URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

