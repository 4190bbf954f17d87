//! NewsAPI wire models
//!
//! Shapes of the `/v2/top-headlines` and `/v2/everything` responses. Articles
//! are kept as the API sends them; the only leniency is that nullable text
//! fields collapse to empty strings so one bad article doesn't fail a page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Headline categories supported by `/v2/top-headlines`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Business,
    Entertainment,
    Sports,
    Health,
    Science,
    Technology,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::General,
            Category::Business,
            Category::Entertainment,
            Category::Sports,
            Category::Health,
            Category::Science,
            Category::Technology,
        ]
    }

    /// Identifier used in the `category=` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::Sports => "sports",
            Category::Health => "health",
            Category::Science => "science",
            Category::Technology => "technology",
        }
    }

    /// Display name for headings and tabs
    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Business => "Business",
            Category::Entertainment => "Entertainment",
            Category::Sports => "Sports",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Technology => "Technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One article record as returned by NewsAPI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(rename = "urlToImage", default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub published_at: String,
    #[serde(default, skip_serializing)]
    source: Option<ArticleSource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ArticleSource {
    #[serde(default)]
    name: Option<String>,
}

impl Article {
    /// Name of the publishing outlet, when the API reports one
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }

    /// Publish timestamp, if `publishedAt` is valid RFC 3339
    pub fn published(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Publish date for display; falls back to the raw text
    pub fn published_display(&self) -> String {
        match self.published() {
            Some(dt) => dt.format("%b %d, %Y %H:%M UTC").to_string(),
            None => self.published_at.clone(),
        }
    }
}

#[cfg(test)]
impl Article {
    pub fn sample(n: usize) -> Self {
        Self {
            title: format!("Headline {n}"),
            description: format!("Description for story {n}"),
            image_url: None,
            url: format!("https://news.example/{n}"),
            author: Some("Staff".to_string()),
            published_at: "2024-03-01T12:00:00Z".to_string(),
            source: None,
        }
    }
}

/// Successful response body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: usize,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Error body NewsAPI sends alongside non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_article() {
        let json = r#"{
            "source": {"id": null, "name": "Example Times"},
            "author": "Jane Doe",
            "title": "Markets rally",
            "description": "Stocks rose on Tuesday.",
            "url": "https://example.com/markets",
            "urlToImage": "https://example.com/img.jpg",
            "publishedAt": "2024-05-07T14:30:00Z",
            "content": "..."
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Markets rally");
        assert_eq!(
            article.image_url.as_deref(),
            Some("https://example.com/img.jpg")
        );
        assert_eq!(article.author.as_deref(), Some("Jane Doe"));
        assert_eq!(article.source_name(), Some("Example Times"));
        assert_eq!(article.published_display(), "May 07, 2024 14:30 UTC");
    }

    #[test]
    fn null_text_fields_become_empty() {
        let json = r#"{"title": null, "description": null, "url": "https://x", "author": null,
                       "urlToImage": null, "publishedAt": "2024-01-01T00:00:00Z"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "");
        assert_eq!(article.description, "");
        assert!(article.author.is_none());
        assert!(article.image_url.is_none());
    }

    #[test]
    fn unparseable_date_is_shown_verbatim() {
        let mut article = Article::sample(1);
        article.published_at = "yesterday".to_string();
        assert!(article.published().is_none());
        assert_eq!(article.published_display(), "yesterday");
    }

    #[test]
    fn feed_response_reads_total_results() {
        let json = r#"{"status":"ok","totalResults":20,"articles":[{"title":"a","url":"u"}]}"#;
        let resp: FeedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total_results, 20);
        assert_eq!(resp.articles.len(), 1);
    }

    #[test]
    fn category_identifiers_are_lowercase() {
        for c in Category::all() {
            assert_eq!(c.as_str(), c.as_str().to_lowercase());
        }
        assert_eq!(Category::Technology.to_string(), "technology");
    }
}
