pub mod config;
pub mod logging;

pub mod classifier;
pub mod downloader;
pub mod error;
pub mod fetch;
pub mod url_model;
