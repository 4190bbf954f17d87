//! Feed query resolution
//!
//! Turns a `FeedQuery` into the NewsAPI request URL. The only branch is the
//! search term: present and non-blank selects `/v2/everything`, anything else
//! selects `/v2/top-headlines` filtered by country and category.

use super::models::Category;
use url::Url;

/// Everything that determines one page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub category: Category,
    pub country: String,
    pub search_term: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

/// Which NewsAPI endpoint a query resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    TopHeadlines,
    Everything,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::TopHeadlines => "/v2/top-headlines",
            Endpoint::Everything => "/v2/everything",
        }
    }
}

impl FeedQuery {
    /// Search term with surrounding whitespace removed; blank counts as absent
    pub fn effective_search(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn endpoint(&self) -> Endpoint {
        if self.effective_search().is_some() {
            Endpoint::Everything
        } else {
            Endpoint::TopHeadlines
        }
    }

    /// Build the request URL against `base` (e.g. `https://newsapi.org`)
    pub fn resolve(&self, base: &Url, api_key: &str) -> Url {
        let mut url = base.clone();
        url.set_path(self.endpoint().path());
        url.set_query(None);

        {
            let mut pairs = url.query_pairs_mut();
            match self.effective_search() {
                Some(term) => {
                    pairs.append_pair("q", term);
                }
                None => {
                    pairs
                        .append_pair("country", &self.country)
                        .append_pair("category", self.category.as_str());
                }
            }
            pairs
                .append_pair("apiKey", api_key)
                .append_pair("page", &self.page.to_string())
                .append_pair("pageSize", &self.page_size.to_string());
        }

        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://newsapi.org").unwrap()
    }

    fn query(category: Category, search: Option<&str>) -> FeedQuery {
        FeedQuery {
            category,
            country: "us".to_string(),
            search_term: search.map(String::from),
            page: 1,
            page_size: 6,
        }
    }

    fn params(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn headlines_without_search_term() {
        let url = query(Category::Business, None).resolve(&base(), "KEY");
        assert_eq!(
            url.as_str(),
            "https://newsapi.org/v2/top-headlines?country=us&category=business&apiKey=KEY&page=1&pageSize=6"
        );
    }

    #[test]
    fn search_ignores_category_and_country() {
        for category in Category::all() {
            let url = query(*category, Some("election")).resolve(&base(), "KEY");
            assert_eq!(url.path(), "/v2/everything");
            let p = params(&url);
            assert!(p.contains(&("q".into(), "election".into())));
            assert!(!p.iter().any(|(k, _)| k == "category" || k == "country"));
        }
    }

    #[test]
    fn empty_or_blank_term_is_no_search() {
        for term in ["", "   ", "\t"] {
            let q = query(Category::Sports, Some(term));
            assert_eq!(q.endpoint(), Endpoint::TopHeadlines);
            let url = q.resolve(&base(), "KEY");
            assert!(!params(&url).iter().any(|(k, _)| k == "q"));
            assert!(params(&url).contains(&("category".into(), "sports".into())));
        }
    }

    #[test]
    fn search_term_is_encoded_and_trimmed() {
        let url = query(Category::General, Some("  rust & go ")).resolve(&base(), "KEY");
        assert!(url.as_str().contains("q=rust+%26+go"));
        assert!(params(&url).contains(&("q".into(), "rust & go".into())));
    }

    #[test]
    fn page_parameters_follow_query() {
        let mut q = query(Category::Health, None);
        q.page = 3;
        q.page_size = 12;
        let p = params(&q.resolve(&base(), "KEY"));
        assert!(p.contains(&("page".into(), "3".into())));
        assert!(p.contains(&("pageSize".into(), "12".into())));
    }

    #[test]
    fn base_path_and_query_are_replaced() {
        let base = Url::parse("http://localhost:9000/ignored?x=1").unwrap();
        let url = query(Category::Science, None).resolve(&base, "");
        assert_eq!(url.path(), "/v2/top-headlines");
        assert!(!params(&url).iter().any(|(k, _)| k == "x"));
        assert!(params(&url).contains(&("apiKey".into(), "".into())));
    }
}
