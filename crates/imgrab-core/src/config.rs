use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::url_model::DEFAULT_EXTENSION;

/// Global configuration loaded from `~/.config/imgrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImgrabConfig {
    /// Pause after every downloaded item, in seconds.
    pub delay_secs: u64,
    /// Extension used when a single-image link carries none.
    pub default_extension: String,
    /// Rename album items to zero-padded positions (`01.jpg`, `02.jpg`, ...).
    pub numerate_albums: bool,
    /// Connection establishment limit in seconds.
    pub connect_timeout_secs: u64,
    /// Optional whole-request limit in seconds (None = unbounded).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Optional `User-Agent` header; libcurl sends none by default.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ImgrabConfig {
    fn default() -> Self {
        Self {
            delay_secs: 2,
            default_extension: DEFAULT_EXTENSION.to_string(),
            numerate_albums: true,
            connect_timeout_secs: 30,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ImgrabConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ImgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ImgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ImgrabConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
