//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::{Config, API_KEY_ENV};

/// Quote a string as a TOML basic string
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    fn api_key_to_toml(&self) -> String {
        if self.api_key.is_empty() {
            format!("# api_key = \"your-newsapi-key\"   # or set {API_KEY_ENV}")
        } else {
            format!("api_key = {}", quoted(&self.api_key))
        }
    }

    /// Render the configuration as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# newsgrid configuration

# NewsAPI key (https://newsapi.org). The {key_env} environment variable wins.
{api_key}

# NewsAPI base URL
api_url = {api_url}

# Title shown in the header
title = {title}

# Color theme: dark, light
theme = {theme}

# Per-request timeout in seconds (0 disables)
request_timeout_secs = {timeout}

# Feed defaults shared by every category page
[feed]
country = {country}
page_size = {page_size}
# Rows from the bottom of the grid at which the next page loads
scroll_threshold = {threshold}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# File logging (in addition to the diagnostics panel or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = {log_file_rotation}  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            key_env = API_KEY_ENV,
            api_key = self.api_key_to_toml(),
            api_url = quoted(self.api_url.as_str()),
            title = quoted(&self.title),
            theme = quoted(&self.theme),
            timeout = self.request_timeout_secs,
            country = quoted(&self.feed.country),
            page_size = self.feed.page_size,
            threshold = self.feed.scroll_threshold,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.display().to_string()),
            log_file_rotation = quoted(self.logging.file_rotation.as_str()),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}
