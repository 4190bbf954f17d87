// News module - NewsAPI contract
//
// - models: article and response shapes
// - query: request URL resolution (headlines vs search)
// - client: HTTP GET and response classification
// - error: fetch failure taxonomy

pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use client::NewsClient;
pub use error::FetchError;
pub use models::{Article, Category, FeedResponse};
pub use query::FeedQuery;
