//! Named routes
//!
//! Static path → category mapping. `/about` is the only route without a feed.

use crate::news::Category;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Business,
    Entertainment,
    Sports,
    Health,
    Science,
    Technology,
    About,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route {0:?} (expected one of: /, /about, /business, /entertainment, /sports, /health, /science, /technology)")]
pub struct RouteError(pub String);

impl Route {
    /// Navigation order (tabs, number keys 0-7)
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::Business,
            Route::Entertainment,
            Route::Sports,
            Route::Health,
            Route::Science,
            Route::Technology,
            Route::About,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Business => "/business",
            Route::Entertainment => "/entertainment",
            Route::Sports => "/sports",
            Route::Health => "/health",
            Route::Science => "/science",
            Route::Technology => "/technology",
            Route::About => "/about",
        }
    }

    /// Parse an exact path. A trailing slash is tolerated (`/sports/`).
    pub fn from_path(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        Route::all()
            .iter()
            .copied()
            .find(|r| r.path() == normalized)
            .ok_or_else(|| RouteError(path.to_string()))
    }

    /// Category shown by this route; `None` for `/about`
    pub fn category(&self) -> Option<Category> {
        match self {
            Route::Home => Some(Category::General),
            Route::Business => Some(Category::Business),
            Route::Entertainment => Some(Category::Entertainment),
            Route::Sports => Some(Category::Sports),
            Route::Health => Some(Category::Health),
            Route::Science => Some(Category::Science),
            Route::Technology => Some(Category::Technology),
            Route::About => None,
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            other => other.category().map(|c| c.label()).unwrap_or(""),
        }
    }

    /// Position in `all()`
    pub fn index(&self) -> usize {
        Route::all().iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Route::all().get(index).copied()
    }

    pub fn next(self) -> Self {
        let all = Route::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Route::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_categories() {
        let expected = [
            ("/", Some(Category::General)),
            ("/business", Some(Category::Business)),
            ("/entertainment", Some(Category::Entertainment)),
            ("/sports", Some(Category::Sports)),
            ("/health", Some(Category::Health)),
            ("/science", Some(Category::Science)),
            ("/technology", Some(Category::Technology)),
            ("/about", None),
        ];
        for (path, category) in expected {
            let route = Route::from_path(path).unwrap();
            assert_eq!(route.path(), path);
            assert_eq!(route.category(), category, "{path}");
        }
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert!(Route::from_path("/world").is_err());
        assert!(Route::from_path("business").is_err());
        assert!(Route::from_path("").is_err());
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::from_path("/sports/").unwrap(), Route::Sports);
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home);
    }

    #[test]
    fn next_and_prev_cycle() {
        assert_eq!(Route::Home.next(), Route::Business);
        assert_eq!(Route::About.next(), Route::Home);
        assert_eq!(Route::Home.prev(), Route::About);
        assert_eq!(Route::from_index(7), Some(Route::About));
        assert_eq!(Route::from_index(8), None);
    }
}
