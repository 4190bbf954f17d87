//! Fetch failure taxonomy

use reqwest::StatusCode;

/// Why a feed fetch produced no articles
///
/// The controller treats every variant the same way; the distinction only
/// shows up in diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS, timeout, or body read failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Upstream answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// 2xx response whose body isn't a feed
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

impl FetchError {
    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Malformed(_) => "malformed",
        }
    }
}
