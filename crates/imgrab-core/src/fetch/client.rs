//! Blocking libcurl fetcher: one `Easy` handle per request, body buffered in memory.

use std::time::Duration;

use super::{Fetch, FetchError};
use crate::config::ImgrabConfig;

/// Transfer settings for [`CurlFetcher`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Whole-transfer limit; `None` leaves the transfer unbounded.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: None,
            user_agent: None,
        }
    }
}

impl From<&ImgrabConfig> for FetchOptions {
    fn from(cfg: &ImgrabConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: FetchOptions,
}

impl CurlFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }

    fn perform(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        if let Some(timeout) = self.options.timeout {
            easy.timeout(timeout)?;
        }
        if let Some(agent) = &self.options.user_agent {
            easy.useragent(agent)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl Fetch for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let (code, body) = self.perform(url).map_err(|e| FetchError::Transport {
            reason: e.description().to_string(),
        })?;
        if !(200..300).contains(&code) {
            tracing::debug!(url, code, "GET returned non-success status");
            return Err(FetchError::Status(code));
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_config() {
        let cfg = ImgrabConfig {
            connect_timeout_secs: 5,
            timeout_secs: Some(60),
            user_agent: Some("imgrab-test".to_string()),
            ..ImgrabConfig::default()
        };
        let opts = FetchOptions::from(&cfg);
        assert_eq!(opts.connect_timeout, Duration::from_secs(5));
        assert_eq!(opts.timeout, Some(Duration::from_secs(60)));
        assert_eq!(opts.user_agent.as_deref(), Some("imgrab-test"));
    }

    #[test]
    fn refused_connection_is_transport_error() {
        let fetcher = CurlFetcher::default();
        let err = fetcher.fetch("http://127.0.0.1:1/nothing").unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
