//! Application configuration loaded from `~/.insightforge/config.toml`.
//!
//! The presence or absence of `api_base_url` is the demo/live switch: demo
//! mode serves fixed fallback data and simulates uploads, live mode performs
//! real HTTP calls. The `INSIGHTFORGE_API_URL` environment variable overrides
//! the file for one-off runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_REVIEW_LIMIT: usize = 50;

/// Settings resolved once at startup and injected into the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend base URL, e.g. `https://api.example.com`. `None` selects demo mode.
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Maximum number of reviews requested on the initial load.
    #[serde(default = "default_review_limit")]
    pub review_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            review_limit: DEFAULT_REVIEW_LIMIT,
        }
    }
}

impl AppConfig {
    /// True when no backend endpoint is configured.
    pub fn demo_mode(&self) -> bool {
        self.api_base_url.is_none()
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The application directory could not be prepared.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// The config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The config file exists but is not valid TOML for this schema.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load the configuration, defaulting every missing piece.
///
/// A missing file is not an error; a malformed one is, so callers can report
/// it and continue with defaults. The environment override is applied last.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME);
    let mut config = if path.is_file() {
        let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?
    } else {
        AppConfig::default()
    };
    apply_env_override(&mut config, std::env::var("INSIGHTFORGE_API_URL").ok());
    Ok(config)
}

fn apply_env_override(config: &mut AppConfig, override_url: Option<String>) {
    if let Some(url) = override_url {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            config.api_base_url = None;
        } else {
            config.api_base_url = Some(trimmed.to_string());
        }
    }
}

fn default_review_limit() -> usize {
    DEFAULT_REVIEW_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_demo_mode() {
        let config = AppConfig::default();
        assert!(config.demo_mode());
        assert_eq!(config.review_limit, 50);
    }

    #[test]
    fn parses_partial_toml() {
        let config: AppConfig = toml::from_str("api_base_url = \"http://localhost:9000\"").unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.review_limit, 50);
        assert!(!config.demo_mode());
    }

    #[test]
    fn env_override_wins_over_file_value() {
        let mut config = AppConfig {
            api_base_url: Some("http://from-file".into()),
            review_limit: 25,
        };
        apply_env_override(&mut config, Some("http://from-env".into()));
        assert_eq!(config.api_base_url.as_deref(), Some("http://from-env"));
        assert_eq!(config.review_limit, 25);
    }

    #[test]
    fn blank_env_override_forces_demo_mode() {
        let mut config = AppConfig {
            api_base_url: Some("http://from-file".into()),
            review_limit: 50,
        };
        apply_env_override(&mut config, Some("  ".into()));
        assert!(config.demo_mode());
    }
}
