//! Article feed controller
//!
//! The state machine behind one mounted feed. It never performs I/O itself:
//! operations that need a fetch return a `FetchTicket`, and whoever runs the
//! request hands the outcome back through `complete()`.
//!
//! ```text
//!            mount / filter change / near bottom
//!   ┌──────┐ ─────────────────────────────────▶ ┌─────────┐
//!   │ Idle │                                    │ Loading │
//!   └──────┘ ◀───────────────────────────────── └─────────┘
//!              success (append) | failure (rollback)
//! ```
//!
//! Each ticket carries the generation it was issued under. Filter changes
//! start a new generation, so a response for the old filter that arrives
//! late is dropped instead of being merged into the new list.

use super::FeedContext;
use crate::news::{Article, Category, FeedQuery, FeedResponse, FetchError};
use std::sync::atomic::{AtomicU64, Ordering};
use url::Url;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Request generation. Unique across every controller in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    fn next() -> Self {
        Self(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The (category, search term) pair a feed is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedFilter {
    pub category: Category,
    search_term: Option<String>,
}

impl FeedFilter {
    /// Blank search terms are normalized away so "" and None compare equal
    pub fn new(category: Category, search_term: Option<&str>) -> Self {
        let search_term = search_term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from);
        Self {
            category,
            search_term,
        }
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }
}

/// One fetch attempt
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub generation: Generation,
    pub query: FeedQuery,
    pub url: Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Idle,
    Loading,
}

/// What `complete()` did with a settled fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    /// Appended `added` articles
    Merged { added: usize },
    /// Current-generation failure; state rolled back
    Failed,
    /// Ticket from an older generation; ignored
    Stale,
}

pub struct FeedController {
    ctx: FeedContext,
    filter: FeedFilter,
    articles: Vec<Article>,
    page: u32,
    total_results: usize,
    status: FeedStatus,
    generation: Generation,
    last_error: Option<String>,
}

impl FeedController {
    /// A fresh, idle controller. Call `mount()` to issue the first fetch.
    pub fn new(ctx: FeedContext, filter: FeedFilter) -> Self {
        Self {
            ctx,
            filter,
            articles: Vec::new(),
            page: 1,
            total_results: 0,
            status: FeedStatus::Idle,
            generation: Generation::next(),
            last_error: None,
        }
    }

    /// First fetch after mounting
    pub fn mount(&mut self) -> Option<FetchTicket> {
        if self.status == FeedStatus::Loading {
            return None;
        }
        Some(self.issue())
    }

    /// Switch filter: reset list and page, then refetch. Same filter is a no-op.
    pub fn set_filter(&mut self, filter: FeedFilter) -> Option<FetchTicket> {
        if filter == self.filter {
            return None;
        }
        tracing::debug!(
            category = %filter.category,
            search = filter.search_term().unwrap_or(""),
            "feed filter changed"
        );
        self.filter = filter;
        self.reset();
        Some(self.issue())
    }

    /// Scroll reached the bottom: load the next page if there is one
    pub fn on_near_bottom(&mut self) -> Option<FetchTicket> {
        if self.status == FeedStatus::Loading || !self.has_more() {
            return None;
        }
        self.page += 1;
        Some(self.issue())
    }

    /// Merge a settled fetch
    pub fn complete(
        &mut self,
        ticket: &FetchTicket,
        result: Result<FeedResponse, FetchError>,
    ) -> Settled {
        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation.value(),
                current = self.generation.value(),
                "discarding stale feed response"
            );
            return Settled::Stale;
        }

        self.status = FeedStatus::Idle;

        match result {
            Ok(response) => {
                let added = self.merge(response);
                self.last_error = None;
                tracing::debug!(
                    page = ticket.query.page,
                    added,
                    held = self.articles.len(),
                    total = self.total_results,
                    "feed page merged"
                );
                Settled::Merged { added }
            }
            Err(e) => {
                // Back to the last page that actually landed
                self.page = ticket.query.page.saturating_sub(1).max(1);
                tracing::warn!(
                    kind = e.kind(),
                    page = ticket.query.page,
                    "There was a problem with the fetch operation: {}",
                    e
                );
                self.last_error = Some(e.to_string());
                Settled::Failed
            }
        }
    }

    fn merge(&mut self, response: FeedResponse) -> usize {
        let held = self.articles.len();

        if response.articles.is_empty() {
            // Upstream has nothing further; stop paginating
            self.total_results = held;
            return 0;
        }

        let total = response.total_results.max(held);
        let room = total - held;
        self.articles
            .extend(response.articles.into_iter().take(room));
        self.total_results = total;
        self.articles.len() - held
    }

    fn reset(&mut self) {
        self.generation = Generation::next();
        self.articles.clear();
        self.page = 1;
        self.total_results = 0;
        self.status = FeedStatus::Idle;
        self.last_error = None;
    }

    fn issue(&mut self) -> FetchTicket {
        let query = self.query();
        let url = query.resolve(&self.ctx.base_url, &self.ctx.api_key);
        self.status = FeedStatus::Loading;
        tracing::debug!(
            page = query.page,
            endpoint = query.endpoint().path(),
            "fetching articles"
        );
        FetchTicket {
            generation: self.generation,
            query,
            url,
        }
    }

    fn query(&self) -> FeedQuery {
        FeedQuery {
            category: self.filter.category,
            country: self.ctx.defaults.country.clone(),
            search_term: self.filter.search_term.clone(),
            page: self.page,
            page_size: self.ctx.defaults.page_size,
        }
    }

    pub fn has_more(&self) -> bool {
        self.articles.len() < self.total_results
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_results(&self) -> usize {
        self.total_results
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FeedStatus::Loading
    }

    pub fn filter(&self) -> &FeedFilter {
        &self.filter
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Most recent fetch failure, cleared on the next success or filter change
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
