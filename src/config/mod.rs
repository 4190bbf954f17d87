//! Configuration for the news reader
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/newsgrid/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod feed;
mod logging;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use feed::{FeedDefaults, FileFeed};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the NewsAPI key
pub const API_KEY_ENV: &str = "NEWS_API_KEY";

const DEFAULT_API_URL: &str = "https://newsapi.org";
const DEFAULT_TITLE: &str = "NewsNayab";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid api_url {value:?}: {source}")]
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// NewsAPI key (empty when not configured; requests then fail upstream)
    pub api_key: String,

    /// NewsAPI base URL
    pub api_url: Url,

    /// Title shown in the header
    pub title: String,

    /// Color theme: "dark" or "light"
    pub theme: String,

    /// Per-request timeout in seconds (0 = no timeout)
    pub request_timeout_secs: u64,

    /// Country, page size, and scroll threshold for every feed
    pub feed: FeedDefaults,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            title: DEFAULT_TITLE.to_string(),
            theme: "dark".to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            feed: FeedDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_api_url() -> Url {
    // Constant input; parse cannot fail
    Url::parse(DEFAULT_API_URL).expect("default API URL is valid")
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub title: Option<String>,
    pub theme: Option<String>,
    pub request_timeout_secs: Option<u64>,

    /// Optional [feed] section
    pub feed: Option<FileFeed>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/newsgrid/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("newsgrid").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    fn load_file_config() -> Result<FileConfig, ConfigError> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self, ConfigError> {
        let file = Self::load_file_config()?;
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed config file with an environment lookup
    pub(crate) fn from_sources<F>(file: FileConfig, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // API key: env > file > empty
        let api_key = env(API_KEY_ENV)
            .or(file.api_key)
            .map(|k| k.trim().to_string())
            .unwrap_or_default();

        // API URL: env > file > default
        let api_url = match env("NEWSGRID_API_URL").or(file.api_url) {
            Some(value) => {
                Url::parse(&value).map_err(|source| ConfigError::InvalidUrl { value, source })?
            }
            None => defaults.api_url,
        };

        let theme = file
            .theme
            .map(|t| t.to_lowercase())
            .unwrap_or(defaults.theme);

        let feed = FeedDefaults::from_file(file.feed, env("NEWSGRID_COUNTRY"));
        let logging = LoggingConfig::from_file(file.logging);

        Ok(Self {
            api_key,
            api_url,
            title: file.title.unwrap_or(defaults.title),
            theme,
            request_timeout_secs: file
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
            feed,
            logging,
        })
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
