// Feed module - pagination and article accumulation
//
// - controller: the per-feed state machine (idle/loading, generations)
// - observer: disposable scroll subscriptions and the near-bottom rule
// - progress: start/complete pairing for the loading gauge

pub mod controller;
pub mod observer;
pub mod progress;

pub use controller::{FeedController, FeedFilter, FeedStatus, FetchTicket, Settled};
pub use observer::{ScrollPosition, ScrollRegistry, ScrollSubscription};
pub use progress::ProgressTracker;

use crate::config::{Config, FeedDefaults};
use url::Url;

/// Everything a controller needs to build request URLs
#[derive(Debug, Clone)]
pub struct FeedContext {
    pub base_url: Url,
    pub api_key: String,
    pub defaults: FeedDefaults,
}

impl FeedContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            defaults: config.feed.clone(),
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            base_url: Url::parse("https://newsapi.org").unwrap(),
            api_key: "test-key".to_string(),
            defaults: FeedDefaults::default(),
        }
    }
}
