//! HTTP client for NewsAPI
//!
//! One GET per fetch ticket. The network half (`get`) is thin; the
//! classification of what came back lives in `decode` so it can be tested
//! without a server.

use super::error::FetchError;
use super::models::{ApiErrorBody, FeedResponse};
use crate::config::{Config, VERSION};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

#[derive(Clone)]
pub struct NewsClient {
    http: reqwest::Client,
}

impl NewsClient {
    /// Build the shared client. `timeout_secs == 0` disables the request timeout.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        // NewsAPI rejects requests without a User-Agent
        let mut builder =
            reqwest::Client::builder().user_agent(format!("newsgrid/{}", VERSION));
        if config.request_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        }
        let http = builder.build()?;
        Ok(Self { http })
    }

    /// Fetch one page of articles
    pub async fn get(&self, url: Url) -> Result<FeedResponse, FetchError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        decode(status, &body)
    }
}

/// Classify a response into a feed page or a failure
pub fn decode(status: StatusCode, body: &[u8]) -> Result<FeedResponse, FetchError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<ApiErrorBody>(body)
            .ok()
            .and_then(|e| match (e.code, e.message) {
                (Some(code), Some(msg)) => Some(format!("{}: {}", code, msg)),
                (None, Some(msg)) => Some(msg),
                (Some(code), None) => Some(code),
                (None, None) => None,
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            });
        return Err(FetchError::Status { status, message });
    }

    let feed: FeedResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    // A 200 carrying status "error" is still a failure
    if feed.status.as_deref() == Some("error") {
        return Err(FetchError::Malformed(
            "response status is \"error\"".to_string(),
        ));
    }

    Ok(feed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success() {
        let body = br#"{"status":"ok","totalResults":2,"articles":[
            {"title":"a","url":"https://a"},{"title":"b","url":"https://b"}]}"#;
        let feed = decode(StatusCode::OK, body).unwrap();
        assert_eq!(feed.total_results, 2);
        assert_eq!(feed.articles[1].title, "b");
    }

    #[test]
    fn non_success_status_uses_api_message() {
        let body = br#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        let err = decode(StatusCode::UNAUTHORIZED, body).unwrap_err();
        match err {
            FetchError::Status { status, message } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(message, "apiKeyInvalid: Your API key is invalid.");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn non_success_without_json_falls_back_to_reason() {
        let err = decode(StatusCode::BAD_GATEWAY, b"<html>").unwrap_err();
        assert_eq!(err.kind(), "status");
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn malformed_body_is_rejected() {
        let err = decode(StatusCode::OK, b"not json").unwrap_err();
        assert_eq!(err.kind(), "malformed");

        let err = decode(StatusCode::OK, br#"{"status":"error"}"#).unwrap_err();
        assert_eq!(err.kind(), "malformed");
    }
}
