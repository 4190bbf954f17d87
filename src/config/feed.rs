//! Feed defaults
//!
//! Country, page size, and scroll threshold shared by the query resolver and
//! the navigation shell. Every feed route uses these; nothing else hardcodes them.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct FeedDefaults {
    /// Two-letter country code for top headlines
    pub country: String,
    /// Articles requested per page
    pub page_size: u32,
    /// Rows from the bottom of the grid at which the next page is requested
    pub scroll_threshold: usize,
}

impl Default for FeedDefaults {
    fn default() -> Self {
        Self {
            country: "us".to_string(),
            page_size: 6,
            scroll_threshold: 1,
        }
    }
}

/// `[feed]` section as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileFeed {
    pub country: Option<String>,
    pub page_size: Option<u32>,
    pub scroll_threshold: Option<usize>,
}

impl FeedDefaults {
    /// Create from file config with defaults. A zero page size falls back to the default.
    pub fn from_file(file: Option<FileFeed>, country_env: Option<String>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            country: country_env
                .or(file.country)
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .unwrap_or(defaults.country),
            page_size: file
                .page_size
                .filter(|&n| n > 0)
                .unwrap_or(defaults.page_size),
            scroll_threshold: file.scroll_threshold.unwrap_or(defaults.scroll_threshold),
        }
    }
}
