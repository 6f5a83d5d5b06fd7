//! SSR host configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': expected 1-65535")]
    InvalidPort { value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Static files (images, favicon) served for any path Leptos does not own.
    pub assets_dir: PathBuf,
}

impl HostConfig {
    /// Build host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ASSETS_DIR`: default `public`
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
            assets_dir: parse_assets_dir(std::env::var("SITE_ASSETS_DIR").ok().as_deref()),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => match value.parse::<u16>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(ConfigError::InvalidPort { value: value.to_owned() }),
        },
    }
}

fn parse_assets_dir(raw: Option<&str>) -> PathBuf {
    PathBuf::from(raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_ASSETS_DIR))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
